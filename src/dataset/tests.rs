use super::*;
use crate::types::DatasetType;
use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

fn sample_ids() -> DatasetId {
    DatasetId::new("Cos7_Microtubules")
        .with_acq_id(3)
        .with_channel("A647")
        .with_position(Position::Single(0))
}

// ==================== DatasetId Tests ====================

#[test]
fn test_display_key() {
    assert_eq!(sample_ids().to_string(), "Cos7_Microtubules/acq=3/ch=A647/pos=0");

    let grid = DatasetId::new("HeLa_Actin")
        .with_acq_id(4)
        .with_position(Position::Grid(12, 3));
    assert_eq!(grid.to_string(), "HeLa_Actin/acq=4/pos=12_3");
}

#[test]
fn test_equal_ids_hash_equal() {
    let mut set = HashSet::new();
    set.insert(sample_ids());
    set.insert(sample_ids());
    assert_eq!(set.len(), 1);
}

#[test]
fn test_position_json_shape() {
    let json = sample_ids().to_json().unwrap();
    assert!(json.contains("\"pos_id\":0"));

    let grid = DatasetId::new("x").with_position(Position::Grid(12, 3));
    let json = grid.to_json().unwrap();
    assert!(json.contains("\"pos_id\":[12,3]"));
    assert_eq!(DatasetId::from_json(&json).unwrap(), grid);
}

#[test]
fn test_position_indices() {
    assert_eq!(Position::Single(7).indices(), vec![7]);
    assert_eq!(Position::Grid(12, 3).indices(), vec![12, 3]);
}

// ==================== Dataset Lifecycle Tests ====================

#[test]
fn test_data_before_attach_is_not_initialized() {
    let dataset: Dataset<String> = Dataset::new(sample_ids(), DatasetType::Localizations);
    assert!(!dataset.is_loaded());
    assert!(matches!(dataset.data(), Err(DatasetError::NotInitialized(_))));
}

#[test]
fn test_attach_then_read() {
    let dataset = Dataset::new(sample_ids(), DatasetType::LocMetadata);
    dataset.attach("payload".to_string()).unwrap();

    assert!(dataset.is_loaded());
    assert_eq!(dataset.data().unwrap(), "payload");
    assert_eq!(dataset.dataset_type(), DatasetType::LocMetadata);
}

#[test]
fn test_attach_twice_fails() {
    let dataset = Dataset::with_data(sample_ids(), DatasetType::Localizations, 1u32);
    assert!(matches!(dataset.attach(2), Err(DatasetError::AlreadyLoaded(_))));
    assert_eq!(*dataset.data().unwrap(), 1);
}

#[test]
fn test_into_parts() {
    let dataset = Dataset::with_data(sample_ids(), DatasetType::Localizations, 5u8);
    let (ids, dataset_type, data) = dataset.into_parts();
    assert_eq!(ids, sample_ids());
    assert_eq!(dataset_type, DatasetType::Localizations);
    assert_eq!(data, Some(5));
}

#[test]
fn test_concurrent_readers_never_see_partial_data() {
    let dataset: Arc<Dataset<Vec<u64>>> =
        Arc::new(Dataset::new(sample_ids(), DatasetType::Localizations));
    let expected: Vec<u64> = (0..10_000).collect();
    let barrier = Arc::new(Barrier::new(5));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let dataset = Arc::clone(&dataset);
            let barrier = Arc::clone(&barrier);
            let expected_len = expected.len();
            thread::spawn(move || {
                barrier.wait();
                loop {
                    match dataset.data() {
                        Ok(data) => {
                            assert_eq!(data.len(), expected_len);
                            break;
                        }
                        Err(DatasetError::NotInitialized(_)) => thread::yield_now(),
                        Err(e) => panic!("unexpected error: {}", e),
                    }
                }
            })
        })
        .collect();

    barrier.wait();
    dataset.attach(expected.clone()).unwrap();

    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(dataset.data().unwrap(), &expected);
}
