use std::f64::consts::PI;

use approx::{assert_abs_diff_eq, assert_relative_eq};

use ballsim::simulation::collision::resolve_pair;
use ballsim::simulation::vector::{from_polar, unit_or};
use ballsim::{Body, BoundarySide, NVec2, Scenario, World};

/// White body with an explicit velocity
pub fn ball(x: f64, y: f64, radius: f64, vx: f64, vy: f64) -> Body {
    Body::new(NVec2::new(x, y), radius, NVec2::new(vx, vy), "white")
}

fn momentum(bodies: &[&Body]) -> NVec2 {
    bodies.iter().fold(NVec2::zeros(), |acc, b| acc + b.momentum())
}

// ==================================================================================
// Vector tests
// ==================================================================================

#[test]
fn vector_arithmetic() {
    let a = NVec2::new(3.0, 4.0);
    let b = NVec2::new(-1.0, 2.0);

    assert_eq!(a + b, NVec2::new(2.0, 6.0));
    assert_eq!(a - b, NVec2::new(4.0, 2.0));
    assert_eq!(a.dot(&b), 5.0);
    assert_eq!(a * 2.0, NVec2::new(6.0, 8.0));
    assert_eq!(a / 2.0, NVec2::new(1.5, 2.0));
    assert_eq!(a.norm(), 5.0);
}

#[test]
fn vector_division_by_zero_is_unchecked() {
    let v = NVec2::new(1.0, 0.0) / 0.0;
    assert!(v.x.is_infinite());
    assert!(v.y.is_nan());
}

#[test]
fn vector_helpers() {
    let v = from_polar(PI / 2.0, 3.0);
    assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(v.y, 3.0, epsilon = 1e-12);

    assert_eq!(unit_or(NVec2::new(0.0, -4.0), NVec2::new(1.0, 0.0)), NVec2::new(0.0, -1.0));
    assert_eq!(unit_or(NVec2::zeros(), NVec2::new(1.0, 0.0)), NVec2::new(1.0, 0.0));
}

// ==================================================================================
// Body tests
// ==================================================================================

#[test]
fn mass_follows_radius() {
    let b = ball(0.0, 0.0, 3.0, 0.0, 0.0);
    assert_relative_eq!(b.mass(), PI * 9.0, max_relative = 1e-12);
    assert!(b.mass() > 0.0);
}

#[test]
#[should_panic(expected = "radius must be positive")]
fn zero_radius_body_is_rejected() {
    ball(0.0, 0.0, 0.0, 1.0, 0.0);
}

#[test]
#[should_panic(expected = "radius must be positive")]
fn negative_radius_body_is_rejected() {
    ball(5.0, 5.0, -1.0, 0.0, 0.0);
}

#[test]
#[should_panic(expected = "radius must be positive")]
fn nan_radius_launched_body_is_rejected() {
    Body::launched(5.0, 5.0, f64::NAN, 0.0, 1.0, "red");
}

#[test]
fn launched_body_velocity_from_angle_and_speed() {
    let b = Body::launched(250.0, 150.0, 2.0, 1.0, 100.0, "red");
    assert_relative_eq!(b.v.x, 1.0f64.cos() * 100.0);
    assert_relative_eq!(b.v.y, 1.0f64.sin() * 100.0);
    assert_eq!(b.color(), "red");
}

#[test]
fn intersection_is_symmetric() {
    let bodies = [
        ball(0.0, 0.0, 1.0, 0.0, 0.0),
        ball(1.5, 0.5, 2.0, 0.0, 0.0),
        ball(10.0, 10.0, 0.5, 0.0, 0.0),
        ball(-2.9, 0.0, 2.0, 0.0, 0.0),
    ];
    for a in &bodies {
        for b in &bodies {
            assert_eq!(a.intersects(b), b.intersects(a));
        }
    }
}

#[test]
fn tangent_bodies_intersect() {
    let a = ball(0.0, 0.0, 1.0, 0.0, 0.0);
    let b = ball(3.0, 0.0, 2.0, 0.0, 0.0);
    assert!(a.intersects(&b), "exact tangency must count as contact");

    let c = ball(3.0001, 0.0, 2.0, 0.0, 0.0);
    assert!(!a.intersects(&c));
}

#[test]
fn boundary_side_detection() {
    let (w, h) = (10.0, 10.0);
    assert_eq!(ball(1.0, 5.0, 1.0, 0.0, 0.0).boundary_side(w, h), BoundarySide::Left);
    assert_eq!(ball(9.0, 5.0, 1.0, 0.0, 0.0).boundary_side(w, h), BoundarySide::Right);
    assert_eq!(ball(5.0, 1.0, 1.0, 0.0, 0.0).boundary_side(w, h), BoundarySide::Top);
    assert_eq!(ball(5.0, 9.0, 1.0, 0.0, 0.0).boundary_side(w, h), BoundarySide::Bottom);
    assert_eq!(ball(5.0, 5.0, 1.0, 0.0, 0.0).boundary_side(w, h), BoundarySide::None);
}

#[test]
fn corner_reports_horizontal_wall_first() {
    let (w, h) = (10.0, 10.0);
    assert_eq!(ball(0.5, 0.5, 1.0, 0.0, 0.0).boundary_side(w, h), BoundarySide::Left);
    assert_eq!(ball(9.5, 9.5, 1.0, 0.0, 0.0).boundary_side(w, h), BoundarySide::Right);
}

#[test]
fn wall_bounce_only_when_heading_into_wall() {
    let mut incoming = ball(1.0, 5.0, 1.0, -5.0, 2.0);
    let side = incoming.boundary_side(10.0, 10.0);
    assert!(incoming.resolve_boundary_collision(side));
    assert_eq!(incoming.v, NVec2::new(5.0, 2.0));

    let mut leaving = ball(1.0, 5.0, 1.0, 5.0, 2.0);
    assert!(!leaving.resolve_boundary_collision(BoundarySide::Left));
    assert_eq!(leaving.v, NVec2::new(5.0, 2.0));
}

#[test]
fn right_wall_reflects_only_rightward_motion() {
    let mut incoming = ball(9.0, 5.0, 1.0, 3.0, -1.0);
    assert_eq!(incoming.boundary_side(10.0, 10.0), BoundarySide::Right);
    assert!(incoming.resolve_boundary_collision(BoundarySide::Right));
    assert_eq!(incoming.v, NVec2::new(-3.0, -1.0));

    let mut leaving = ball(9.0, 5.0, 1.0, -3.0, -1.0);
    assert!(!leaving.resolve_boundary_collision(BoundarySide::Right));
    assert_eq!(leaving.v, NVec2::new(-3.0, -1.0));
}

#[test]
fn top_wall_reflects_only_upward_motion() {
    let mut incoming = ball(5.0, 1.0, 1.0, 2.0, -3.0);
    assert_eq!(incoming.boundary_side(10.0, 10.0), BoundarySide::Top);
    assert!(incoming.resolve_boundary_collision(BoundarySide::Top));
    assert_eq!(incoming.v, NVec2::new(2.0, 3.0));

    let mut leaving = ball(5.0, 1.0, 1.0, 2.0, 3.0);
    assert!(!leaving.resolve_boundary_collision(BoundarySide::Top));
    assert_eq!(leaving.v, NVec2::new(2.0, 3.0));
}

#[test]
fn bottom_wall_leaves_upward_motion_alone() {
    let mut leaving = ball(5.0, 9.0, 1.0, 2.0, -3.0);
    assert!(!leaving.resolve_boundary_collision(BoundarySide::Bottom));
    assert_eq!(leaving.v, NVec2::new(2.0, -3.0));
}

#[test]
fn wall_bounce_is_idempotent() {
    let mut b = ball(1.0, 5.0, 1.0, -5.0, 0.0);
    b.resolve_boundary_collision(BoundarySide::Left);
    b.resolve_boundary_collision(BoundarySide::Left);
    assert_eq!(b.v.x, 5.0);

    let mut b = ball(5.0, 9.0, 1.0, 0.0, 3.0);
    b.resolve_boundary_collision(BoundarySide::Bottom);
    b.resolve_boundary_collision(BoundarySide::Bottom);
    assert_eq!(b.v.y, -3.0);

    let mut b = ball(5.0, 5.0, 1.0, 1.0, 1.0);
    assert!(!b.resolve_boundary_collision(BoundarySide::None));
}

// ==================================================================================
// Collision response tests
// ==================================================================================

#[test]
fn collision_conserves_momentum_and_energy() {
    let mut a = ball(0.0, 0.0, 1.0, 3.0, 1.0);
    let mut b = ball(1.5, 0.5, 2.0, -1.0, 0.5);

    let p_before = momentum(&[&a, &b]);
    let e_before = a.kinetic_energy() + b.kinetic_energy();

    let contact = a.resolve_ball_collision(&mut b);
    assert!(!contact.degenerate);

    let p_after = momentum(&[&a, &b]);
    let e_after = a.kinetic_energy() + b.kinetic_energy();

    assert_abs_diff_eq!(p_before.x, p_after.x, epsilon = 1e-9);
    assert_abs_diff_eq!(p_before.y, p_after.y, epsilon = 1e-9);
    assert_relative_eq!(e_before, e_after, max_relative = 1e-12);
}

#[test]
fn head_on_equal_masses_swap_velocities() {
    let mut a = ball(0.0, 0.0, 1.0, 1.0, 0.0);
    let mut b = ball(2.0, 0.0, 1.0, -1.0, 0.0);
    a.resolve_ball_collision(&mut b);

    assert_abs_diff_eq!(a.v.x, -1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(b.v.x, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(a.v.y, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(b.v.y, 0.0, epsilon = 1e-12);
}

#[test]
fn coincident_centers_use_fallback_normal() {
    let mut a = ball(5.0, 5.0, 1.0, 1.0, 0.0);
    let mut b = ball(5.0, 5.0, 1.0, 0.0, 0.0);

    let contact = a.resolve_ball_collision(&mut b);
    assert!(contact.degenerate);
    assert_eq!(contact.normal, NVec2::new(1.0, 0.0));
    assert!(a.v.x.is_finite() && a.v.y.is_finite());
    assert!(b.v.x.is_finite() && b.v.y.is_finite());
    assert_abs_diff_eq!(a.v.x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(b.v.x, 1.0, epsilon = 1e-12);
}

#[test]
fn resolve_pair_is_order_independent() {
    let bodies = vec![ball(0.0, 0.0, 1.0, 2.0, 0.0), ball(1.0, 1.0, 1.5, 0.0, -1.0)];

    let mut forward = bodies.clone();
    resolve_pair(&mut forward, 0, 1);
    let mut backward = bodies;
    resolve_pair(&mut backward, 1, 0);

    for (f, b) in forward.iter().zip(backward.iter()) {
        assert_abs_diff_eq!(f.v.x, b.v.x, epsilon = 1e-12);
        assert_abs_diff_eq!(f.v.y, b.v.y, epsilon = 1e-12);
    }
}

// ==================================================================================
// World step tests
// ==================================================================================

#[test]
fn step_head_on_scenario_swaps_velocities() {
    let mut world = World::new(
        vec![ball(10.0, 10.0, 1.0, 1.0, 0.0), ball(13.0, 10.0, 1.0, -1.0, 0.0)],
        100.0,
        100.0,
    );

    let report = world.step(0.5);

    assert_eq!(report.contacts, 1);
    assert_eq!(report.wall_bounces, 0);
    let b = world.bodies();
    assert_eq!(b[0].x, NVec2::new(10.5, 10.0));
    assert_eq!(b[1].x, NVec2::new(12.5, 10.0));
    assert_abs_diff_eq!(b[0].v.x, -1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(b[1].v.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(world.t, 0.5);
}

#[test]
fn step_integrates_then_bounces_off_wall() {
    let mut world = World::new(vec![ball(2.0, 5.0, 1.0, -4.0, 0.0)], 10.0, 10.0);

    let report = world.step(0.25);

    // moved to x = 1.0 = r first, then reflected
    assert_eq!(world.bodies()[0].x.x, 1.0);
    assert_eq!(world.bodies()[0].v.x, 4.0);
    assert_eq!(report.wall_bounces, 1);
}

#[test]
fn step_handles_empty_and_single_worlds() {
    let mut empty = World::new(Vec::new(), 10.0, 10.0);
    assert_eq!(empty.step(0.1).contacts, 0);

    let mut single = World::new(vec![ball(5.0, 5.0, 1.0, 1.0, 0.0)], 10.0, 10.0);
    let report = single.step(0.1);
    assert_eq!(report.contacts, 0);
    assert_abs_diff_eq!(single.bodies()[0].x.x, 5.1, epsilon = 1e-12);
}

#[test]
fn step_reports_degenerate_contacts() {
    let mut world = World::new(
        vec![ball(5.0, 5.0, 1.0, 0.0, 0.0), ball(5.0, 5.0, 1.0, 0.0, 0.0)],
        10.0,
        10.0,
    );
    let report = world.step(0.0);
    assert_eq!(report.contacts, 1);
    assert_eq!(report.degenerate, 1);
    assert!(world.bodies().iter().all(|b| b.v.x.is_finite() && b.v.y.is_finite()));
}

#[test]
fn default_decay_leaves_velocity_untouched() {
    let mut world = World::new(vec![ball(5.0, 5.0, 1.0, 1.25, -0.75)], 10.0, 10.0);
    world.step(0.016);
    assert_eq!(world.bodies()[0].v, NVec2::new(1.25, -0.75));
}

#[test]
fn decay_hook_scales_velocity_when_configured() {
    let mut world = World::new(vec![ball(50.0, 50.0, 1.0, 4.0, 0.0)], 100.0, 100.0).with_decay(0.5);
    world.step(1.0);
    assert_abs_diff_eq!(world.bodies()[0].v.x, 2.0, epsilon = 1e-12);
}

#[test]
fn demo_keeps_kinetic_energy() {
    let mut scenario = Scenario::demo();
    let e0 = scenario.world.kinetic_energy();

    for _ in 0..600 {
        scenario.world.step(1.0 / 60.0);
    }

    assert_relative_eq!(scenario.world.kinetic_energy(), e0, max_relative = 1e-9);
    assert_eq!(scenario.world.bodies().len(), 5);
}

#[test]
fn views_expose_render_state_in_order() {
    let world = Scenario::demo().world;
    let views = world.views();

    assert_eq!(views.len(), 5);
    assert_eq!(views[0].color, "red");
    assert_eq!(views[3].radius, 50.0);
    assert_eq!((views[4].x, views[4].y), (400.0, 200.0));
}
