use chromawheel::{
    models::Srgb, Harmony, Palette, Point, Raster, Sample, Temperature, WheelGeometry,
};

#[test]
fn raster_pixels_probe_like_the_analytic_wheel() {
    let wheel = WheelGeometry::new(200);
    let raster = Raster::synthesize(&wheel);

    for (x, y) in [(100, 20), (150, 60), (40, 140), (100, 100), (0, 0), (185, 100)] {
        let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
        let rgb = raster.color(x, y).unwrap();
        assert_eq!(rgb, wheel.color_at_point(center), "pixel ({x}, {y})");

        let sample = Sample::probe(&wheel, rgb, center);
        assert_eq!(sample.inside, wheel.contains(center));
        assert_eq!(sample.complement.is_some(), sample.inside);
        if !sample.inside {
            assert_eq!(sample.rgb, Srgb::WHITE);
        }
    }
}

#[test]
fn probe_to_palette_to_css() {
    let wheel = WheelGeometry::new(400);
    let sample = Sample::probe_at(&wheel, 0.0, 150.0);
    assert_eq!(sample.descriptors.temperature, Temperature::Warm);

    let mut palette = Palette::new();
    palette.add(&sample);
    palette.add_harmony(&wheel, &sample, Harmony::Complementary);

    // The base color of the harmony replaces the earlier copy.
    assert_eq!(palette.len(), 2);

    let css = palette.export_css();
    let lines: Vec<_> = css.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], ":root");
    assert_eq!(lines[1], "{");
    assert!(lines[2].starts_with("  --swatch-01: #"));
    assert!(lines[2].ends_with("/* Comp Cyan */"), "{css}");
    assert!(lines[3].starts_with("  --swatch-02: "));
    assert!(lines[3].contains(&sample.hex));
    assert_eq!(lines[4], "}");

    palette.clear();
    assert_eq!(palette.export_css(), "");
}

#[test]
fn harmony_names_round_trip() {
    for kind in Harmony::ALL {
        assert_eq!(kind.to_string().parse::<Harmony>(), Ok(kind));
    }
    assert!("Square".parse::<Harmony>().is_err());
}

#[test]
fn custom_geometry_is_validated() {
    assert!(WheelGeometry::with_radii(100, 10.0, 45.0).is_ok());
    assert!(WheelGeometry::with_radii(100, 45.0, 10.0).is_err());
    assert!(WheelGeometry::with_radii(100, 10.0, 60.0).is_err());
    assert!(WheelGeometry::with_radii(0, 0.0, 0.0).is_err());
}
