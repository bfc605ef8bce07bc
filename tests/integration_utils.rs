//! Integration tests exercising the public utility surface from outside the crate.

use simkit::{
    color_to_hex, distance, distance_coords, distance_coords_with_norm, distance_with_norm,
    hex_to_color, remove_at_unordered, Norm, Rgba, SimkitError, SimkitResult, Vec2,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_documented_color_examples() -> SimkitResult<()> {
    init_logging();

    assert_eq!(color_to_hex(Rgba::rgb(255, 0, 128)), "FF0080");
    assert_eq!(hex_to_color("FF0080")?, Rgba::new(255, 0, 128, 255));
    assert!(hex_to_color("ZZ0080").unwrap_err().is_parse_error());
    assert!(matches!(
        hex_to_color("FF"),
        Err(SimkitError::HexTooShort { len: 2, .. })
    ));

    Ok(())
}

#[test]
fn test_palette_round_trip() -> SimkitResult<()> {
    let palette = [
        Rgba::rgb(0, 0, 0),
        Rgba::rgb(255, 255, 255),
        Rgba::rgb(34, 139, 34),
        Rgba::new(200, 16, 46, 0),
    ];

    for color in palette {
        let parsed = hex_to_color(&color_to_hex(color))?;
        assert_eq!(parsed, Rgba::rgb(color.r, color.g, color.b));
    }

    Ok(())
}

#[test]
fn test_point_and_coordinate_overloads_agree() -> SimkitResult<()> {
    init_logging();

    let a = Vec2::new(-6.0, 2.0);
    let b = Vec2::new(2.0, -4.0);

    assert_eq!(distance(a, b), 10.0);
    assert_eq!(distance_coords(a.x, a.y, b.x, b.y), 10.0);

    for p in [1.0, 2.0, 3.5, f32::INFINITY] {
        let by_points = distance_with_norm(a, b, p)?;
        let by_coords = distance_coords_with_norm(a.x, a.y, b.x, b.y, p)?;
        assert!((by_points - by_coords).abs() < 1e-4, "p={}", p);
    }

    assert_eq!(distance_with_norm(a, b, 1.0)?, 14.0);
    assert_eq!(distance_with_norm(a, b, f32::INFINITY)?, 8.0);

    Ok(())
}

#[test]
fn test_unsupported_norm_propagates() {
    init_logging();

    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(1.0, 1.0);

    let result = distance_with_norm(a, b, 0.5);
    assert_eq!(result, Err(SimkitError::UnsupportedNorm { p: 0.5 }));
    assert!(distance_coords_with_norm(0.0, 0.0, 1.0, 1.0, -2.0).is_err());
    assert!(Norm::from_exponent(f32::NAN).is_err());
}

#[test]
fn test_nearest_target_by_chebyshev_distance() -> SimkitResult<()> {
    // King-move range check, the typical consumer of the Chebyshev norm.
    let king = Vec2::new(4.0, 4.0);
    let targets = [Vec2::new(6.0, 5.0), Vec2::new(4.0, 7.0), Vec2::new(1.0, 1.0)];

    let norm = Norm::from_exponent(f32::INFINITY)?;
    let in_range: Vec<Vec2> = targets
        .iter()
        .copied()
        .filter(|t| norm.between(king, *t) <= 2.0)
        .collect();

    assert_eq!(in_range, vec![Vec2::new(6.0, 5.0)]);
    Ok(())
}

#[test]
fn test_despawn_loop_with_unordered_removal() {
    // Remove every dead entry while iterating, the way entity pools use it.
    let mut health = vec![10, 0, 5, 0, 0, 7];
    let mut i = 0;
    while i < health.len() {
        if health[i] == 0 {
            remove_at_unordered(&mut health, i);
        } else {
            i += 1;
        }
    }

    health.sort_unstable();
    assert_eq!(health, vec![5, 7, 10]);
}
