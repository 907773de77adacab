use crate::error::CoreResult;
use crate::world::World;

const CAPITAL_WASTELAND: &str = include_str!("../content/capital_wasteland.json");

/// The bundled "Capital Wasteland" world: Vault 101, Megaton and the
/// surrounding ruins.
pub fn capital_wasteland() -> CoreResult<World> {
    World::from_json(CAPITAL_WASTELAND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{LocationId, QuestId};

    #[test]
    fn bundled_world_parses() {
        let world = capital_wasteland().unwrap();
        assert_eq!(world.start().as_str(), "vault101");
        assert_eq!(world.location_count(), 10);
        assert!(world.quest(&QuestId::new("firstSteps")).is_some());
    }

    #[test]
    fn bundled_world_is_consistent() {
        let issues = capital_wasteland().unwrap().validate();
        assert!(issues.is_empty(), "content issues: {issues:?}");
    }

    #[test]
    fn basement_needs_a_flashlight() {
        let world = capital_wasteland().unwrap();
        let house = world.location(&LocationId::new("abandonedhouse")).unwrap();
        let down = house.find_exit("down").unwrap();
        assert!(down.requirement.is_some());
        assert!(down.blocked_message.is_some());
    }

    #[test]
    fn every_load_gets_fresh_instance_ids() {
        let a = capital_wasteland().unwrap();
        let b = capital_wasteland().unwrap();
        let id = LocationId::new("wasteland");
        let enemy_a = &a.location(&id).unwrap().enemies[0];
        let enemy_b = &b.location(&id).unwrap().enemies[0];
        assert_eq!(enemy_a.name, enemy_b.name);
        assert_ne!(enemy_a.id, enemy_b.id);
    }
}
