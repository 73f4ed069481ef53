//! End-to-end tests for the startup ingest and the query service.

use std::sync::Arc;

use frames_api::pipeline::run_startup_ingest;
use frames_api::query::QueryService;
use frames_common::{FramesError, Scanline, ScanlineWidths, TableName};
use renderer::{colorize, Colormap};
use storage::{FrameStore, SqliteFrameStore};
use tempfile::TempDir;
use test_utils::{assert_approx_eq, constant_row, depth_series, write_source_csv};

// ============================================================================
// Helper functions
// ============================================================================

async fn open_store(dir: &TempDir) -> Arc<SqliteFrameStore> {
    let url = format!("sqlite://{}", dir.path().join("database/image_data.db").display());
    Arc::new(
        SqliteFrameStore::connect(&url, TableName::new("resized_images").unwrap())
            .await
            .unwrap(),
    )
}

// ============================================================================
// Startup ingest
// ============================================================================

#[tokio::test]
async fn test_ingest_two_row_reference() {
    let db_dir = tempfile::tempdir().unwrap();
    let store = open_store(&db_dir).await;

    let rows = vec![
        Scanline::new(1.0, constant_row(200, 0.0)),
        Scanline::new(2.0, constant_row(200, 255.0)),
    ];
    let (_src_dir, source) = write_source_csv(&rows).unwrap();

    let summary = run_startup_ingest(&source, ScanlineWidths::default(), store.as_ref())
        .await
        .unwrap();
    assert_eq!(summary.rows, 2);
    assert_eq!(summary.width, 150);

    let persisted = store.range(1.0, 2.0).await.unwrap();
    assert_eq!(persisted.len(), 2);
    for (row, value) in persisted.iter().zip([0.0, 255.0]) {
        assert_eq!(row.width(), 150);
        for v in &row.pixels {
            assert_approx_eq!(*v, value, 1e-6);
        }
    }
}

#[tokio::test]
async fn test_bad_row_keeps_previous_table() {
    let db_dir = tempfile::tempdir().unwrap();
    let store = open_store(&db_dir).await;

    let good = depth_series(3, 200, 10.0, 1.0);
    let (_good_dir, good_source) = write_source_csv(&good).unwrap();
    run_startup_ingest(&good_source, ScanlineWidths::default(), store.as_ref())
        .await
        .unwrap();

    let mut bad = depth_series(4, 200, 50.0, 1.0);
    bad[2].pixels.pop();
    let (_bad_dir, bad_source) = write_source_csv(&bad).unwrap();

    match run_startup_ingest(&bad_source, ScanlineWidths::default(), store.as_ref()).await {
        Err(FramesError::SchemaMismatch { row, expected, actual }) => {
            assert_eq!((row, expected, actual), (2, 200, 199));
        }
        other => panic!("expected SchemaMismatch, got {:?}", other),
    }

    // Prior table intact, nothing from the failed source written.
    assert_eq!(store.range(10.0, 12.0).await.unwrap().len(), 3);
    assert!(store.range(50.0, 53.0).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_source_fails() {
    let db_dir = tempfile::tempdir().unwrap();
    let store = open_store(&db_dir).await;
    let missing = db_dir.path().join("nope.csv");

    let err = run_startup_ingest(&missing, ScanlineWidths::default(), store.as_ref())
        .await
        .unwrap_err();
    assert!(matches!(err, FramesError::Source(_)));
}

// ============================================================================
// Query service over SQLite
// ============================================================================

#[tokio::test]
async fn test_query_service_over_ingested_table() {
    let db_dir = tempfile::tempdir().unwrap();
    let store = open_store(&db_dir).await;

    let rows = depth_series(10, 200, 100.0, 0.5);
    let (_src_dir, source) = write_source_csv(&rows).unwrap();
    run_startup_ingest(&source, ScanlineWidths::default(), store.as_ref())
        .await
        .unwrap();

    let service = QueryService::new(store.clone());

    let fetched = service.range_fetch(101.0, 102.0).await.unwrap();
    let depths: Vec<f64> = fetched.iter().map(|r| r.depth).collect();
    assert_eq!(depths, vec![101.0, 101.5, 102.0]);

    assert!(matches!(
        service.range_fetch(0.0, 1.0).await,
        Err(FramesError::NotFound(_))
    ));
    assert!(matches!(
        service.range_fetch(2.0, 1.0).await,
        Err(FramesError::InvalidRange(_))
    ));

    let png = service.point_render(101.5, Some("plasma")).await.unwrap();
    let expected = colorize(&fetched[1].pixels, Colormap::Plasma).unwrap();
    assert_eq!(png, expected);

    assert!(matches!(
        service.point_render(101.25, None).await,
        Err(FramesError::NotFound(_))
    ));

    store.close().await;
}
