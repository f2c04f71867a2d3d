//! Schedule loading error types

use thiserror::Error;

/// Why a schedule resource was skipped
///
/// Every variant names the resource so the message can be shown as is.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Connection to the feed host failed
    #[error("Erreur lors du téléchargement de {title}: {reason}")]
    ConnectionFailed { title: String, reason: String },

    /// Download did not complete in time
    #[error("Délai dépassé ({timeout_secs}s) lors du téléchargement de {title}")]
    Timeout { title: String, timeout_secs: u64 },

    /// Feed host answered with a non-success status
    #[error("Erreur lors du téléchargement de {title} (HTTP {status})")]
    DownloadFailed { title: String, status: u16 },

    /// Declared format is neither csv nor gtfs
    #[error("Le format '{format}' n'est pas valide pour {title}")]
    UnsupportedFormat { title: String, format: String },

    /// Declared gtfs but the server did not send a zip
    #[error("Le type de contenu '{content_type}' n'est pas valide pour {title}")]
    ContentTypeMismatch { title: String, content_type: String },

    /// Payload is not a readable zip archive
    #[error("Le fichier pour {title} n'est pas un fichier ZIP valide: {reason}")]
    InvalidArchive { title: String, reason: String },

    /// Bundle lacks one of the four required tables
    #[error("Le fichier {table} est absent du GTFS de {title}")]
    MissingTable { title: String, table: String },

    /// A table could not be read
    #[error("Erreur lors de la lecture de {table} pour {title}: {reason}")]
    Parse {
        title: String,
        table: String,
        reason: String,
    },
}

impl ScheduleError {
    /// Title of the resource the error belongs to
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::ConnectionFailed { title, .. }
            | Self::Timeout { title, .. }
            | Self::DownloadFailed { title, .. }
            | Self::UnsupportedFormat { title, .. }
            | Self::ContentTypeMismatch { title, .. }
            | Self::InvalidArchive { title, .. }
            | Self::MissingTable { title, .. }
            | Self::Parse { title, .. } => title,
        }
    }

    /// Whether the failure happened on the network rather than in the content
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed { .. } | Self::Timeout { .. } | Self::DownloadFailed { .. }
        )
    }
}
