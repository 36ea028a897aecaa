//! End-to-End Generation Tests
//!
//! Config -> permutation table -> grid -> PNG on disk -> decoded pixels.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p heightmap-tests --test e2e_generation
//! ```

use heightmap_core::{
    generate_heightmap, populate_grid, save_heightmap, AxisMapping, HeightGrid, HeightmapConfig,
    ImprovedNoise, Noise3D, OffsetMode, PermutationTable,
};
use heightmap_tests::{decode_png, decode_png_file};
use pretty_assertions::assert_eq;

fn config(width: u32, height: u32, seed: u32) -> HeightmapConfig {
    HeightmapConfig {
        width,
        height,
        seed: Some(seed),
        ..HeightmapConfig::default()
    }
}

#[test]
fn test_default_size_image_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("img.png");

    let result = generate_heightmap(&config(300, 300, 2024)).unwrap();
    save_heightmap(&result, &path).unwrap();

    let image = decode_png_file(&path).unwrap();
    assert_eq!((image.width, image.height), (300, 300));
    assert_eq!(image.color_type, png::ColorType::Rgba);
    assert_eq!(image.pixels.len(), 300 * 300 * 4);
}

#[test]
fn test_pixels_are_opaque_gray_of_floored_samples() {
    let result = generate_heightmap(&config(40, 30, 17)).unwrap();
    let image = decode_png(&result.png).unwrap();

    for y in 0..30 {
        for x in 0..40 {
            let [r, g, b, a] = image.rgba(x, y);
            let expected = (255.0 * result.grid.get(x, y)).floor() as u8;
            assert_eq!((r, g, b, a), (expected, expected, expected, 255));
        }
    }
}

#[test]
fn test_single_pixel_image() {
    let result = generate_heightmap(&HeightmapConfig {
        octave: 0.0,
        ..config(1, 1, 5)
    })
    .unwrap();
    assert_eq!(result.grid.data.len(), 1);

    let image = decode_png(&result.png).unwrap();
    assert_eq!((image.width, image.height), (1, 1));
    // With z = 0 the only sample sits on a lattice point.
    assert_eq!(image.rgba(0, 0), [127, 127, 127, 255]);
}

#[test]
fn test_reference_axis_mapping_transposes_square_grid() {
    let direct = generate_heightmap(&HeightmapConfig {
        axes: AxisMapping::Direct,
        ..config(24, 24, 8)
    })
    .unwrap();
    let reference = generate_heightmap(&HeightmapConfig {
        axes: AxisMapping::Reference,
        ..config(24, 24, 8)
    })
    .unwrap();

    for y in 0..24 {
        for x in 0..24 {
            assert_eq!(reference.grid.get(x, y), direct.grid.get(y, x));
        }
    }
}

#[test]
fn test_zero_table_grid_does_not_crash() {
    let noise = ImprovedNoise::new(PermutationTable::from_values(vec![0; 256])).unwrap();
    let config = HeightmapConfig {
        octave: 0.0,
        ..config(32, 32, 0)
    };
    let grid = populate_grid(&config, &noise).unwrap();

    assert_eq!(grid.data.len(), 32 * 32);
    assert!(grid.data.iter().all(|v| (0.0..=1.0).contains(v)));
    // Separable in x and y, so the reference mapping on a square grid is
    // symmetric about the diagonal.
    for y in 0..32 {
        for x in 0..32 {
            assert!((grid.get(x, y) - grid.get(y, x)).abs() < 1e-12);
        }
    }
}

#[test]
fn test_zero_table_on_lattice_is_uniform() {
    let noise = ImprovedNoise::new(PermutationTable::from_values(vec![0; 256])).unwrap();
    let grid = HeightGrid::populate(
        8,
        8,
        &noise,
        HeightmapConfig {
            octave: 0.0,
            frequency: 8.0,
            ..config(8, 8, 0)
        }
        .sampling(),
    );
    assert!(grid.data.iter().all(|&v| v == 0.5));
}

#[test]
fn test_reference_offsets_make_columns_constant() {
    // Under the reference offsets, y only enters through floor(y), which is
    // 0 across the unit cell, so every sample with the same x matches.
    let result = generate_heightmap(&HeightmapConfig {
        offsets: OffsetMode::Reference,
        axes: AxisMapping::Direct,
        ..config(16, 16, 12)
    })
    .unwrap();

    for x in 0..16 {
        let top = result.grid.get(x, 0);
        for y in 1..16 {
            assert_eq!(result.grid.get(x, y), top);
        }
    }
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("heightmap.json");
    let original = HeightmapConfig {
        frequency: 3.0,
        ..config(20, 10, 99)
    };
    std::fs::write(&path, serde_json::to_string_pretty(&original).unwrap()).unwrap();

    let loaded = HeightmapConfig::from_json_file(&path).unwrap();
    assert_eq!(loaded, original);

    let a = generate_heightmap(&original).unwrap();
    let b = generate_heightmap(&loaded).unwrap();
    assert_eq!(a.hash, b.hash);
}

#[test]
fn test_noise_shared_across_threads() {
    let noise = heightmap_core::build_noise(&config(16, 16, 31), 31).unwrap();

    let values: Vec<f64> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let noise = &noise;
                s.spawn(move || noise.sample_01(i as f64 * 0.1, 0.2, 0.45))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, v) in values.iter().enumerate() {
        assert_eq!(*v, noise.sample_01(i as f64 * 0.1, 0.2, 0.45));
    }
}
