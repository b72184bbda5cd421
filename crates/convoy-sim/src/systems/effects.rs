//! Transient effect expiry.
//!
//! Damage flashes live as components with an expiry tick on the
//! simulation clock, so visual transients stay deterministic and
//! testable. This system strips expired flashes each tick.

use hecs::{Entity, World};

use convoy_core::components::DamageFlash;

/// Remove every `DamageFlash` whose expiry tick has passed.
pub fn run(world: &mut World, current_tick: u64, expired_buffer: &mut Vec<Entity>) {
    expired_buffer.clear();

    for (entity, flash) in world.query_mut::<&DamageFlash>() {
        if current_tick >= flash.expires_at_tick {
            expired_buffer.push(entity);
        }
    }

    for entity in expired_buffer.drain(..) {
        let _ = world.remove_one::<DamageFlash>(entity);
    }
}
