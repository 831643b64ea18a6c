//! The track catalog: ordered file list plus the derived display-name map.
//!
//! Two representations live side by side: `ordered_paths`, the playback
//! order, and `by_name`, the display name to directory mapping shown in the
//! list widget and persisted in playlists. They are reconciled only at the
//! explicit [`TrackCatalog::split`] / [`TrackCatalog::join`] points.

mod model;
mod scan;

pub use model::{RemovedTrack, Track, TrackCatalog};
pub use scan::scan_dir;
