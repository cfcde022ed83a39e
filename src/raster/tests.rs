use crate::dataset::Dataset;
use crate::driver::Driver;
use crate::raster::{rasterize_layer, Burn, GDALDataType, GdalType, MergeAlgorithm, RasterizeOptions};
use crate::test_utils::{fixture, SuppressGDALErrorLog};
use ndarray::arr2;

fn blank_grid() -> Dataset {
    let driver = Driver::get_by_name("MEM").unwrap();
    let mut dataset = driver.create_with_band_type::<u8>("", 5, 5, 1).unwrap();
    dataset
        .set_geo_transform(&[0.0, 2.0, 0.0, 10.0, 0.0, -2.0])
        .unwrap();
    dataset
}

#[test]
fn test_type_names() {
    assert_eq!(u8::type_name(), "Byte");
    assert_eq!(f64::type_name(), "Float64");
}

#[test]
fn test_band_size_and_type() {
    let dataset = blank_grid();
    let rb = dataset.rasterband(1).unwrap();
    assert_eq!(rb.size(), (5, 5));
    assert_eq!(rb.band_type(), GDALDataType::GDT_Byte);
}

#[test]
fn test_missing_band() {
    let _nolog = SuppressGDALErrorLog::new();
    let dataset = blank_grid();
    assert!(dataset.rasterband(2).is_err());
}

#[test]
fn test_fill_and_read() {
    let dataset = blank_grid();
    let mut rb = dataset.rasterband(1).unwrap();
    rb.fill(4.0).unwrap();
    let array = rb.read_band_as_array::<u8>().unwrap();
    assert_eq!(array.dim(), (5, 5));
    assert!(array.iter().all(|&v| v == 4));

    let window = rb.read_as_array::<u8>((1, 1), (2, 3), (2, 3)).unwrap();
    assert_eq!(window.dim(), (3, 2));
}

#[test]
fn test_set_no_data_value() {
    let dataset = blank_grid();
    let mut rb = dataset.rasterband(1).unwrap();
    assert_eq!(rb.no_data_value(), None);
    rb.set_no_data_value(Some(0.0)).unwrap();
    assert_eq!(rb.no_data_value(), Some(0.0));
    rb.set_no_data_value(None).unwrap();
    assert_eq!(rb.no_data_value(), None);
}

#[test]
fn test_rasterize_layer_constant() {
    let mut dataset = blank_grid();
    let source = Dataset::open_vector(&fixture("parcels.geojson")).unwrap();
    let layer = source.layer(0).unwrap();
    rasterize_layer(&mut dataset, &[1], &layer, &Burn::Value(1), Default::default()).unwrap();

    let array = dataset
        .rasterband(1)
        .unwrap()
        .read_band_as_array::<u8>()
        .unwrap();
    let expected = arr2(&[
        [1, 1, 0, 0, 0],
        [1, 1, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 1, 1],
        [0, 0, 0, 1, 1],
    ]);
    assert_eq!(array, expected);
}

#[test]
fn test_rasterize_layer_attribute() {
    let mut dataset = blank_grid();
    let source = Dataset::open_vector(&fixture("parcels.geojson")).unwrap();
    let layer = source.layer(0).unwrap();
    rasterize_layer(
        &mut dataset,
        &[1],
        &layer,
        &Burn::from("class"),
        Default::default(),
    )
    .unwrap();

    let array = dataset
        .rasterband(1)
        .unwrap()
        .read_band_as_array::<u8>()
        .unwrap();
    let expected = arr2(&[
        [7, 7, 0, 0, 0],
        [7, 7, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 3, 3],
        [0, 0, 0, 3, 3],
    ]);
    assert_eq!(array, expected);
}

#[test]
fn test_rasterize_layer_merge_add() {
    let mut dataset = blank_grid();
    let source = Dataset::open_vector(&fixture("parcels.geojson")).unwrap();
    let layer = source.layer(0).unwrap();
    let options = RasterizeOptions {
        merge_algorithm: MergeAlgorithm::Add,
        ..Default::default()
    };
    rasterize_layer(&mut dataset, &[1], &layer, &Burn::Value(2), options).unwrap();
    rasterize_layer(&mut dataset, &[1], &layer, &Burn::Value(2), options).unwrap();

    let array = dataset
        .rasterband(1)
        .unwrap()
        .read_band_as_array::<u8>()
        .unwrap();
    assert_eq!(array[[0, 0]], 4);
    assert_eq!(array[[2, 2]], 0);
}

#[test]
fn test_rasterize_layer_missing_attribute() {
    let _nolog = SuppressGDALErrorLog::new();
    let mut dataset = blank_grid();
    let source = Dataset::open_vector(&fixture("parcels.geojson")).unwrap();
    let layer = source.layer(0).unwrap();
    let result = rasterize_layer(
        &mut dataset,
        &[1],
        &layer,
        &Burn::from("height"),
        Default::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_rasterize_layer_bad_band() {
    let mut dataset = blank_grid();
    let source = Dataset::open_vector(&fixture("parcels.geojson")).unwrap();
    let layer = source.layer(0).unwrap();
    assert!(rasterize_layer(&mut dataset, &[], &layer, &Burn::Value(1), Default::default()).is_err());
    assert!(rasterize_layer(&mut dataset, &[2], &layer, &Burn::Value(1), Default::default()).is_err());
}
