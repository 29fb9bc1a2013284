//! Engine tick integration tests for movement, TTL, tweens, collision,
//! bounds and timers, run through schedules the way the game loop runs them.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use leyenda::components::boxcollider::{Bounded, BoxCollider, Solid};
use leyenda::components::group::Group;
use leyenda::components::mapposition::MapPosition;
use leyenda::components::rigidbody::RigidBody;
use leyenda::components::rotation::Rotation;
use leyenda::components::timer::Timer;
use leyenda::components::tint::Tint;
use leyenda::components::ttl::Ttl;
use leyenda::components::tween::{LoopMode, Track, TweenAlpha, TweenPosition, TweenRotation};
use leyenda::events::collision::CollisionEvent;
use leyenda::events::timer::TimerEvent;
use leyenda::resources::worldtime::WorldTime;
use leyenda::systems::collision::collision_detector;
use leyenda::systems::movement::{bounds_system, movement_system, solid_pushout_system};
use leyenda::systems::time::{update_timers, update_world_time};
use leyenda::systems::ttl::ttl_system;
use leyenda::systems::tween::{tween_alpha_system, tween_mapposition_system, tween_rotation_system};

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta: 0.0,
        time_scale: 1.0,
        frame_count: 0,
    });
    world
}

fn make_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            movement_system,
            solid_pushout_system,
            bounds_system,
            collision_detector,
            ttl_system,
            update_timers,
        )
            .chain(),
    );
    schedule.add_systems((tween_mapposition_system, tween_rotation_system, tween_alpha_system));
    schedule
}

fn tick(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
}

#[derive(Resource, Default)]
struct Seen {
    collisions: Vec<(Entity, Entity)>,
    timers: Vec<String>,
}

fn observe(world: &mut World) {
    world.init_resource::<Seen>();
    world.add_observer(|t: On<CollisionEvent>, mut s: ResMut<Seen>| {
        let CollisionEvent { a, b } = *t.event();
        s.collisions.push((a, b));
    });
    world.add_observer(|t: On<TimerEvent>, mut s: ResMut<Seen>| {
        s.timers.push(t.event().signal.clone())
    });
}

// ==================== MOVEMENT ====================

#[test]
fn movement_integrates_velocity_and_skips_frozen_bodies() {
    let mut world = make_world();
    let mut schedule = make_schedule();
    let mut moving = RigidBody::new();
    moving.set_velocity(Vector2::new(100.0, -40.0));
    let walker = world.spawn((MapPosition::new(10.0, 10.0), moving)).id();
    let mut frozen = moving;
    frozen.freeze();
    let statue = world.spawn((MapPosition::new(10.0, 10.0), frozen)).id();

    tick(&mut world, &mut schedule, 0.5);
    let p = world.get::<MapPosition>(walker).unwrap().pos;
    assert!(approx_eq(p.x, 60.0));
    assert!(approx_eq(p.y, -10.0));
    let s = world.get::<MapPosition>(statue).unwrap().pos;
    assert!(approx_eq(s.x, 10.0) && approx_eq(s.y, 10.0));
}

#[test]
fn time_scale_slows_movement() {
    let mut world = make_world();
    let mut schedule = make_schedule();
    world.resource_mut::<WorldTime>().time_scale = 0.5;
    let mut body = RigidBody::new();
    body.set_velocity(Vector2::new(100.0, 0.0));
    let e = world.spawn((MapPosition::new(0.0, 0.0), body)).id();
    tick(&mut world, &mut schedule, 1.0);
    assert!(approx_eq(world.get::<MapPosition>(e).unwrap().pos.x, 50.0));
}

#[test]
fn bounds_keep_collider_inside_area() {
    let mut world = make_world();
    let mut schedule = make_schedule();
    let mut body = RigidBody::new();
    body.set_velocity(Vector2::new(-200.0, 0.0));
    let e = world
        .spawn((
            MapPosition::new(20.0, 300.0),
            body,
            BoxCollider::centered(20.0, 20.0),
            Bounded::new(0.0, 0.0, 800.0, 600.0),
        ))
        .id();
    tick(&mut world, &mut schedule, 0.5);
    assert!(approx_eq(world.get::<MapPosition>(e).unwrap().pos.x, 10.0));
}

#[test]
fn moving_collider_stops_at_solid() {
    let mut world = make_world();
    let mut schedule = make_schedule();
    world.spawn((MapPosition::new(100.0, 0.0), BoxCollider::centered(20.0, 40.0), Solid));
    let mut body = RigidBody::new();
    body.set_velocity(Vector2::new(100.0, 0.0));
    let e = world
        .spawn((MapPosition::new(60.0, 0.0), body, BoxCollider::centered(20.0, 20.0)))
        .id();
    for _ in 0..5 {
        tick(&mut world, &mut schedule, 0.1);
    }
    // Solid's left edge is at 90; the mover is 10 px wide on each side.
    assert!(approx_eq(world.get::<MapPosition>(e).unwrap().pos.x, 80.0));
}

// ==================== TTL ====================

#[test]
fn ttl_despawns_after_lifetime() {
    let mut world = make_world();
    let mut schedule = make_schedule();
    let slash = world.spawn((MapPosition::new(0.0, 0.0), Ttl::new(0.15))).id();
    tick(&mut world, &mut schedule, 0.1);
    assert!(world.get_entity(slash).is_ok());
    tick(&mut world, &mut schedule, 0.1);
    assert!(world.get_entity(slash).is_err());
}

// ==================== TWEENS ====================

#[test]
fn position_and_rotation_tweens_reach_their_targets() {
    let mut world = make_world();
    let mut schedule = make_schedule();
    let e = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            TweenPosition::new(Vector2::new(0.0, 0.0), Vector2::new(100.0, 50.0), 1.0),
            Rotation::default(),
            TweenRotation::new(0.0, 180.0, 1.0),
        ))
        .id();
    tick(&mut world, &mut schedule, 0.5);
    let p = world.get::<MapPosition>(e).unwrap().pos;
    assert!(approx_eq(p.x, 50.0) && approx_eq(p.y, 25.0));
    assert!(approx_eq(world.get::<Rotation>(e).unwrap().degrees, 90.0));

    tick(&mut world, &mut schedule, 0.7);
    let p = world.get::<MapPosition>(e).unwrap().pos;
    assert!(approx_eq(p.x, 100.0) && approx_eq(p.y, 50.0));
    assert!(approx_eq(world.get::<Rotation>(e).unwrap().degrees, 180.0));
}

#[test]
fn alpha_tween_waits_for_delay_then_chains() {
    let mut world = make_world();
    let mut schedule = make_schedule();
    let e = world
        .spawn((
            Tint::alpha(0.0),
            TweenAlpha::from_track(Track::new(0.0, 1.0, 1.0).with_delay(0.5))
                .then(Track::new(0.5, 1.0, 0.5).with_loop_mode(LoopMode::PingPong)),
        ))
        .id();
    tick(&mut world, &mut schedule, 0.4);
    assert!((world.get::<Tint>(e).unwrap().opacity() - 0.0).abs() < 0.01);

    // 0.1 s of delay left, then half a second of the fade-in.
    tick(&mut world, &mut schedule, 0.6);
    assert!((world.get::<Tint>(e).unwrap().opacity() - 0.5).abs() < 0.01);

    tick(&mut world, &mut schedule, 0.6);
    assert!((world.get::<Tint>(e).unwrap().opacity() - 1.0).abs() < 0.01);
    assert!(world.get::<TweenAlpha>(e).unwrap().then.is_none());

    // The pulse bounces between 0.5 and 1.0.
    tick(&mut world, &mut schedule, 0.25);
    assert!((world.get::<Tint>(e).unwrap().opacity() - 0.75).abs() < 0.01);
}

// ==================== COLLISION ====================

#[test]
fn collision_detector_reports_grouped_overlaps_only() {
    let mut world = make_world();
    observe(&mut world);
    let mut schedule = make_schedule();
    let player = world
        .spawn((Group::new("player"), MapPosition::new(0.0, 0.0), BoxCollider::centered(20.0, 20.0)))
        .id();
    let enemy = world
        .spawn((Group::new("enemy"), MapPosition::new(15.0, 5.0), BoxCollider::centered(20.0, 20.0)))
        .id();
    // No group: never reported.
    world.spawn((MapPosition::new(5.0, 0.0), BoxCollider::centered(20.0, 20.0)));
    // Far away.
    world.spawn((Group::new("enemy"), MapPosition::new(400.0, 0.0), BoxCollider::centered(20.0, 20.0)));

    tick(&mut world, &mut schedule, 0.016);
    let seen = world.resource::<Seen>();
    assert_eq!(seen.collisions.len(), 1);
    let (a, b) = seen.collisions[0];
    assert!((a == player && b == enemy) || (a == enemy && b == player));
}

// ==================== TIMERS ====================

#[test]
fn timers_fire_once_with_their_signal() {
    let mut world = make_world();
    observe(&mut world);
    let mut schedule = make_schedule();
    world.spawn(Timer::new(0.5, "dialogue"));
    world.spawn(Timer::new(1.2, "boot_done"));

    for _ in 0..5 {
        tick(&mut world, &mut schedule, 0.3);
    }
    assert_eq!(
        world.resource::<Seen>().timers,
        vec!["dialogue".to_string(), "boot_done".to_string()]
    );
}
