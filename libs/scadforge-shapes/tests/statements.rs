use scadforge_shapes::Shape;

#[test]
fn cube_statement_matches_expected_text() {
    let mut cube = Shape::cube(10.0, 20.0, 30.0);
    cube.set_position(1.0, 2.0, 3.0);
    assert_eq!(
        cube.render_statement(),
        "translate([1.000000, 2.000000, 3.000000]) box([10.000000, 20.000000, 30.000000]);"
    );
}

#[test]
fn sphere_statement_at_default_position() {
    let sphere = Shape::sphere(5.0);
    assert_eq!(
        sphere.render_statement(),
        "translate([0.000000, 0.000000, 0.000000]) sphere(r=5.000000);"
    );
}

#[test]
fn cylinder_statement_orders_height_before_radius() {
    let mut cylinder = Shape::cylinder(3.0, 12.0);
    cylinder.set_position(0.0, -4.0, 0.5);
    assert_eq!(
        cylinder.render_statement(),
        "translate([0.000000, -4.000000, 0.500000]) cylinder(h=12.000000, r=3.000000);"
    );
}

#[test]
fn frustum_statement_uses_distinct_radii() {
    let frustum = Shape::frustum(6.0, 2.0, 9.0);
    assert_eq!(
        frustum.render_statement(),
        "translate([0.000000, 0.000000, 0.000000]) cylinder(h=9.000000, r1=6.000000, r2=2.000000);"
    );
}

#[test]
fn torus_statement_composes_revolve_around_profile() {
    let torus = Shape::torus(10.0, 2.0);
    assert_eq!(
        torus.render_statement(),
        "translate([0.000000, 0.000000, 0.000000]) \
         rotate_extrude(angle=360) translate([10.000000, 0, 0]) circle(r=2.000000);"
    );
}

#[test]
fn torus_position_wraps_the_whole_revolve() {
    let mut torus = Shape::torus(8.0, 1.5);
    torus.set_position(5.0, 5.0, 5.0);
    let statement = torus.render_statement();
    assert!(statement.starts_with("translate([5.000000, 5.000000, 5.000000]) rotate_extrude"));
}

#[test]
fn rendering_twice_yields_identical_text() {
    let mut shape = Shape::cylinder(1.0, 2.0);
    shape.set_position(0.25, 0.5, 0.75);
    let first = shape.render_statement();
    let second = shape.render_statement();
    assert_eq!(first, second);
}

#[test]
fn set_position_twice_reflects_only_the_last_call() {
    let mut shape = Shape::sphere(4.0);
    shape.set_position(9.0, 9.0, 9.0);
    shape.set_position(1.0, 2.0, 3.0);
    assert_eq!(
        shape.render_statement(),
        "translate([1.000000, 2.000000, 3.000000]) sphere(r=4.000000);"
    );
}

#[test]
fn zero_and_negative_dimensions_render_verbatim() {
    let cube = Shape::cube(0.0, -1.0, 2.0);
    assert_eq!(
        cube.render_statement(),
        "translate([0.000000, 0.000000, 0.000000]) box([0.000000, -1.000000, 2.000000]);"
    );
}
