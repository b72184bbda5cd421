//! Collision and damage resolution.
//!
//! Runs after all movement: first projectile↔enemy, then enemy↔convoy.
//! Collision is a radius-sum distance check; there is no impulse
//! resolution. Removal is deferred through the despawn buffer so the scan
//! never skips or double-visits a live entity.

use hecs::{Entity, World};

use convoy_core::components::{Convoy, DamageFlash, Enemy, Projectile};
use convoy_core::constants::*;
use convoy_core::enums::GamePhase;
use convoy_core::events::UiEvent;
use convoy_core::types::Position;

use crate::engine::ScoreState;

/// Run the full collision pass for one tick.
///
/// If the convoy is destroyed, the session transitions to `GameOver` and
/// the remainder of the pass is abandoned.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    score: &mut ScoreState,
    ui_events: &mut Vec<UiEvent>,
    phase: &mut GamePhase,
    current_tick: u64,
) {
    despawn_buffer.clear();

    let projectiles: Vec<(Entity, Position, f64)> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(e, (p, pos))| (e, *pos, p.damage))
        .collect();

    let mut enemies: Vec<EnemyContact> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(e, (enemy, pos))| EnemyContact {
            entity: e,
            position: *pos,
            radius: enemy.collision_radius,
            alive: true,
        })
        .collect();

    // --- Projectile vs enemy ---
    for (projectile_entity, projectile_pos, damage) in projectiles {
        for contact in enemies.iter_mut().filter(|c| c.alive) {
            let distance = projectile_pos.range_to(&contact.position);
            if distance > PROJECTILE_HIT_RADIUS + contact.radius {
                continue;
            }

            // Projectile is consumed by its first hit.
            despawn_buffer.push(projectile_entity);

            let killed = apply_enemy_damage(world, contact.entity, damage, current_tick);
            if let Some(score_value) = killed {
                contact.alive = false;
                despawn_buffer.push(contact.entity);
                score.kill_points += score_value;
                log::debug!("enemy destroyed, +{score_value} points");
            }
            break;
        }
    }

    // --- Enemy vs convoy ---
    let convoy_state = world
        .query::<(&Convoy, &Position)>()
        .iter()
        .next()
        .map(|(e, (convoy, pos))| (e, *pos, convoy.collision_radius));

    if let Some((convoy_entity, convoy_pos, convoy_radius)) = convoy_state {
        for contact in enemies.iter().filter(|c| c.alive) {
            let distance = contact.position.range_to(&convoy_pos);
            if distance > contact.radius + convoy_radius {
                continue;
            }

            let contact_damage = world
                .get::<&Enemy>(contact.entity)
                .map(|e| e.contact_damage)
                .unwrap_or(0.0);

            // Enemy is consumed on contact, not repelled.
            despawn_buffer.push(contact.entity);

            let destroyed =
                apply_convoy_damage(world, convoy_entity, contact_damage, current_tick);
            if let Ok(convoy) = world.get::<&Convoy>(convoy_entity) {
                ui_events.push(UiEvent::HealthChanged {
                    health: convoy.health,
                    max_health: convoy.max_health,
                });
            }

            if destroyed {
                *phase = GamePhase::GameOver;
                ui_events.push(UiEvent::GameOver {
                    final_score: score.total(),
                });
                log::info!("convoy destroyed, final score {}", score.total());
                break;
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

struct EnemyContact {
    entity: Entity,
    position: Position,
    radius: f64,
    alive: bool,
}

/// Damage an enemy and start its flash. Returns `Some(score_value)` if the
/// enemy was destroyed.
fn apply_enemy_damage(
    world: &mut World,
    entity: Entity,
    damage: f64,
    current_tick: u64,
) -> Option<u64> {
    let (dead, score_value) = match world.get::<&mut Enemy>(entity) {
        Ok(mut enemy) => {
            enemy.health = (enemy.health - damage).max(0.0);
            (enemy.health <= 0.0, enemy.score_value)
        }
        Err(_) => return None,
    };

    let _ = world.insert_one(
        entity,
        DamageFlash {
            expires_at_tick: current_tick + (ENEMY_FLASH_SECS * TICK_RATE as f64) as u64,
        },
    );

    dead.then_some(score_value)
}

/// Damage the convoy, clamping health at zero, and start its flash.
/// Returns true if the convoy was destroyed.
fn apply_convoy_damage(
    world: &mut World,
    entity: Entity,
    damage: f64,
    current_tick: u64,
) -> bool {
    let destroyed = match world.get::<&mut Convoy>(entity) {
        Ok(mut convoy) => {
            convoy.health = (convoy.health - damage).max(0.0);
            convoy.health <= 0.0
        }
        Err(_) => return false,
    };

    let _ = world.insert_one(
        entity,
        DamageFlash {
            expires_at_tick: current_tick + (CONVOY_FLASH_SECS * TICK_RATE as f64) as u64,
        },
    );

    destroyed
}
