use tabled::Table;

use crate::{
    config, error, info,
    management::{SnapshotStore, SqliteSnapshotStore},
    success,
    types::TrackTableRow,
    warning,
};

/// Prints the stored snapshot of `user` as a table, or every stored user id
/// when no user is given.
pub async fn history(user: Option<String>) {
    let database_url = config::database_url();
    let store = match SqliteSnapshotStore::connect(&database_url).await {
        Ok(s) => s,
        Err(e) => error!("Cannot open snapshot database {}. Err: {}", database_url, e),
    };

    let Some(user_id) = user else {
        match store.user_ids().await {
            Ok(ids) if ids.is_empty() => warning!("No snapshots stored yet."),
            Ok(ids) => {
                info!("Stored snapshots:");
                for id in ids {
                    println!("  {}", id);
                }
            }
            Err(e) => error!("Cannot list snapshots. Err: {}", e),
        }
        return;
    };

    match store.get_snapshot(&user_id).await {
        Ok(Some(snapshot)) if !snapshot.tracks.is_empty() => {
            let table_rows: Vec<TrackTableRow> = snapshot
                .tracks
                .into_iter()
                .enumerate()
                .map(|(i, t)| TrackTableRow {
                    position: i + 1,
                    name: t.name,
                    artist: t.artist,
                    album: t.album,
                })
                .collect();
            let count = table_rows.len();

            println!("{}", Table::new(table_rows));
            success!(
                "{} tracks saved for {} at {}",
                count,
                user_id,
                snapshot.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
            );
        }
        Ok(_) => warning!("No snapshot stored for {}", user_id),
        Err(e) => error!("Cannot load snapshot. Err: {}", e),
    }
}
