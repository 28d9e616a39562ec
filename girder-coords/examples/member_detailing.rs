use girder_coords::{LcsFrame, Point3, Vector3};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Shared site data: LCS origin in global E/N/U coordinates and a
    // detailing offset in member-local coordinates.
    let lcs_origin = Point3::new(500_000.0, 300_000.0, 100_000.0);
    let detailing_offset = Point3::new(-100.0, -40.0, 50.0);

    // --- Horizontal member: local X north, local Z up ---

    let horizontal = LcsFrame::from_directions(
        lcs_origin,
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    )?;
    println!("{}", horizontal.axes());

    let gcs = horizontal.to_global(detailing_offset);
    println!("Horizontal detailed position: E {}, N {}, U {}", gcs.x, gcs.y, gcs.z);
    println!(
        "Expected horizontal detailed position: E {}, N {}, U {}",
        500_040, 299_900, 100_050
    );

    let recomputed = horizontal.to_local(gcs);
    println!(
        "Recomputed initial horizontal detailed position: E {}, N {}, U {}",
        recomputed.x, recomputed.y, recomputed.z
    );

    println!();

    // --- Vertical member: local X up, local Z north ---

    let vertical = LcsFrame::from_directions(
        lcs_origin,
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(0.0, 1.0, 0.0),
    )?;
    println!("{}", vertical.axes());

    let gcs = vertical.to_global(detailing_offset);
    println!("Vertical detailed position: E {}, N {}, U {}", gcs.x, gcs.y, gcs.z);
    println!(
        "Expected vertical detailed position: E {}, N {}, U {}",
        499_960, 300_050, 99_900
    );

    let recomputed = vertical.to_local(gcs);
    println!(
        "Recomputed initial vertical detailed position: E {}, N {}, U {}",
        recomputed.x, recomputed.y, recomputed.z
    );

    Ok(())
}
