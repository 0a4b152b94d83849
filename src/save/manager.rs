//! Save orchestration
//!
//! Writes and reads the previous ship, the mercenary roster, the world
//! parameters and both extra-data blobs. A missing save is never an error:
//! reads return `None` and the caller starts fresh.

use serde_json::Value;

use super::error::SaveError;
use super::extra::{ExtraDataStore, ExtraScope};
use super::records::{decode_world, MercenaryRecord, ShipRecord, WorldConfig};
use super::{MERC_SAVE_FILE, SAVE_FILE_NAME, WORLD_SAVE_FILE_NAME};
use crate::codec::ini::IniFile;
use crate::codec::{decode_items, encode_items, tree, CodecError};
use crate::files::{FsStorage, ResourceLocator, Storage};
use crate::items::{ItemResolver, SolItem};
use crate::random::SeedSource;
use crate::ships::{Hero, HullConfig, HullResolver, Position, ShipConfig};

/// Owns the save locations and the extra-data blobs for one game process
#[derive(Debug)]
pub struct SaveManager<S: Storage = FsStorage> {
    storage: S,
    locator: ResourceLocator,
    player_extra: ExtraDataStore,
    world_extra: ExtraDataStore,
}

impl SaveManager<FsStorage> {
    /// Manager writing to the local filesystem
    pub fn new(locator: ResourceLocator) -> Self {
        Self::with_storage(locator, FsStorage)
    }
}

impl<S: Storage> SaveManager<S> {
    /// Manager using a custom file access backend
    pub fn with_storage(locator: ResourceLocator, storage: S) -> Self {
        Self {
            storage,
            locator,
            player_extra: ExtraDataStore::new(ExtraScope::Player),
            world_extra: ExtraDataStore::new(ExtraScope::World),
        }
    }

    pub fn locator(&self) -> &ResourceLocator {
        &self.locator
    }

    /// Whether there is a previous ship to continue with
    pub fn has_prev_ship(&self) -> bool {
        self.locator.resource_exists(&self.storage, SAVE_FILE_NAME)
    }

    // ========================================================================
    // Player ship
    // ========================================================================

    /// Save the player's ship, inventory and mercenaries.
    ///
    /// Mercenaries, player extra data and the ship record are written
    /// independently; a failed write is logged and does not stop the others.
    pub fn write_ships<H>(&mut self, hull: &HullConfig, money: f32, items: &[SolItem], hero: &Hero, hulls: &H)
    where
        H: HullResolver + ?Sized,
    {
        if let Err(e) = self.write_mercs(hero, hulls) {
            log::error!("Could not save mercenaries: {}", e);
        }
        if let Err(e) = self.player_extra.flush(&self.storage, &self.locator) {
            log::error!("Could not save extra player data: {}", e);
        }

        let record = ShipRecord {
            hull: hulls.name_of(hull),
            money: money as i32,
            items: encode_items(items),
            position: hero.position(),
        };
        if let Err(e) = self.write_text(SAVE_FILE_NAME, &record.to_ini().to_text()) {
            log::error!("Could not save previous ship: {}", e);
        } else {
            log::info!("Saved ship {} with {} items", record.hull, items.len());
        }
    }

    /// Load the previous ship.
    ///
    /// Returns `None` when there is no save, it names no hull, or the hull is
    /// not known to `hulls`.
    pub fn read_ship<H, R>(&self, hulls: &H, items: &R) -> Option<ShipConfig>
    where
        H: HullResolver + ?Sized,
        R: ItemResolver + ?Sized,
    {
        let text = self.read_text(SAVE_FILE_NAME)?;
        let ini = IniFile::parse(&text);

        let hull_name = ini.get_str("hull")?;
        let Some(hull) = hulls.config(hull_name) else {
            log::warn!("Previous ship uses unknown hull {}", hull_name);
            return None;
        };

        let money = or_default("money", ini.get_int("money"), 0);
        let items_str = ini.get_str("items").unwrap_or_default().to_string();
        let x = or_default("x", ini.get_float("x"), 0.0);
        let y = or_default("y", ini.get_float("y"), 0.0);

        let decoded = decode_items(&items_str, items);
        log::debug!("Loaded previous ship {} with {} items", hull_name, decoded.len());
        Some(ShipConfig::new(hull, items_str, decoded, money, Position::new(x, y)))
    }

    // ========================================================================
    // Mercenaries
    // ========================================================================

    /// Replace the mercenary file with the hero's current roster. The file is
    /// always truncated so dismissed or destroyed mercenaries never return.
    fn write_mercs<H>(&self, hero: &Hero, hulls: &H) -> Result<(), SaveError>
    where
        H: HullResolver + ?Sized,
    {
        let records: Vec<MercenaryRecord> = hero
            .merc_ships()
            .map(|merc| MercenaryRecord {
                hull: hulls.name_of(&merc.hull),
                money: merc.money as i32,
                items: encode_items(merc.items.flatten_reversed_groups()),
            })
            .collect();

        let text = tree::to_pretty(&records)?;
        self.write_text(MERC_SAVE_FILE, &text)?;
        log::debug!("Saved {} mercenaries", records.len());
        Ok(())
    }

    /// Raw mercenary records. Missing or unreadable files give an empty list,
    /// entries without a hull are skipped.
    pub fn read_mercenary_records(&self) -> Vec<MercenaryRecord> {
        let Some(text) = self.read_text(MERC_SAVE_FILE) else {
            return Vec::new();
        };
        let entries = match tree::parse_lenient(&text) {
            Ok(Value::Array(entries)) => entries,
            Ok(_) => {
                log::warn!("Mercenary file is not a list, ignoring it");
                return Vec::new();
            }
            Err(e) => {
                log::error!("Could not read mercenaries: {}", e);
                return Vec::new();
            }
        };

        entries
            .iter()
            .filter_map(|entry| match entry.as_object().and_then(MercenaryRecord::from_object) {
                Some(record) => Some(record),
                None => {
                    log::warn!("Skipping malformed mercenary entry {}", entry);
                    None
                }
            })
            .collect()
    }

    /// Mercenaries ready to respawn around the hero's spawn point
    pub fn read_mercenaries<H, R>(&self, hulls: &H, items: &R) -> Vec<ShipConfig>
    where
        H: HullResolver + ?Sized,
        R: ItemResolver + ?Sized,
    {
        self.read_mercenary_records()
            .into_iter()
            .filter_map(|record| {
                let Some(hull) = hulls.config(&record.hull) else {
                    log::warn!("Skipping mercenary with unknown hull {}", record.hull);
                    return None;
                };
                let decoded = decode_items(&record.items, items);
                Some(ShipConfig::new(hull, record.items, decoded, record.money, Position::default()))
            })
            .collect()
    }

    // ========================================================================
    // World
    // ========================================================================

    /// Save the world seed and system count, then the world extra data.
    ///
    /// A failed world file write aborts before the extra data is touched and
    /// is returned to the caller.
    pub fn save_world<R>(&mut self, seeds: &R, number_of_systems: u32) -> Result<(), SaveError>
    where
        R: SeedSource + ?Sized,
    {
        let world = WorldConfig::new(seeds.seed(), number_of_systems);
        let text = tree::to_pretty(&world)?;
        if let Err(e) = self.write_text(WORLD_SAVE_FILE_NAME, &text) {
            log::error!("Could not save world file: {}", e);
            return Err(e);
        }
        log::debug!("Successfully saved the world file");

        if let Err(e) = self.world_extra.flush(&self.storage, &self.locator) {
            log::error!("Could not save extra world data: {}", e);
        }
        Ok(())
    }

    /// Load the saved world, or `None` if there is none or it cannot be read
    pub fn load_world(&self) -> Option<WorldConfig> {
        let text = self.read_text(WORLD_SAVE_FILE_NAME)?;
        match tree::parse_lenient(&text).and_then(|value| decode_world(&value)) {
            Ok(world) => {
                log::debug!("Successfully loaded the world file");
                Some(world)
            }
            Err(e) => {
                log::error!("Cannot read world file: {}", e);
                None
            }
        }
    }

    // ========================================================================
    // Extra data
    // ========================================================================

    /// Store module data in the player's extra save data (memory only until
    /// the next `write_ships`)
    pub fn save_player_json(&mut self, module: &str, json: Value) {
        self.player_extra.save(module, json);
    }

    /// Module data from the player's extra save data
    pub fn load_player_json(&mut self, module: &str) -> Option<&Value> {
        self.player_extra.load(&self.storage, &self.locator, module)
    }

    /// Store module data in the world's extra save data (memory only until
    /// the next `save_world`)
    pub fn save_world_json(&mut self, module: &str, json: Value) {
        self.world_extra.save(module, json);
    }

    /// Module data from the world's extra save data
    pub fn load_world_json(&mut self, module: &str) -> Option<&Value> {
        self.world_extra.load(&self.storage, &self.locator, module)
    }

    // ========================================================================
    // File helpers
    // ========================================================================

    fn write_text(&self, file_name: &str, text: &str) -> Result<(), SaveError> {
        let path = self.locator.resource_path(file_name);
        self.storage
            .write(&path, text)
            .map_err(|e| SaveError::io(&path, e))
    }

    /// File contents, or `None` if it does not exist or cannot be read
    fn read_text(&self, file_name: &str) -> Option<String> {
        if !self.locator.resource_exists(&self.storage, file_name) {
            return None;
        }
        let path = self.locator.resource_path(file_name);
        match self.storage.read_to_string(&path) {
            Ok(text) => Some(text),
            Err(e) => {
                log::error!("Cannot read {:?}: {}", path, e);
                None
            }
        }
    }
}

/// Unwrap an optional field, logging and substituting `default` when the
/// stored value is malformed
fn or_default<T>(key: &str, value: Result<Option<T>, CodecError>, default: T) -> T {
    match value {
        Ok(Some(v)) => v,
        Ok(None) => default,
        Err(e) => {
            log::warn!("Previous ship {}: {}, using default", key, e);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::storage::testing::MemoryStorage;
    use crate::items::{ClipConfig, ItemContainer, ItemManager};
    use crate::random::GameRandom;
    use crate::ships::{HullConfigManager, SolShip};
    use serde_json::json;
    use std::fs;
    use std::path::{Path, PathBuf};

    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("solsave_manager_test_{}", name));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn clip1() -> ClipConfig {
        ClipConfig {
            code: "clip1".to_string(),
            size: 30,
            infinite: false,
        }
    }

    fn hulls() -> HullConfigManager {
        let mut hulls = HullConfigManager::new();
        hulls.register(HullConfig::new("imperialSmall"));
        hulls.register(HullConfig::new("pirateMedium"));
        hulls
    }

    fn items() -> ItemManager {
        let mut items = ItemManager::new();
        items.register_gun("gun1", clip1());
        items.register(SolItem::new("shield"));
        items.register(SolItem::new("armor"));
        items
    }

    fn ship(hull: &str, money: f32, codes: &[&str]) -> SolShip {
        SolShip {
            hull: HullConfig::new(hull),
            money,
            items: codes.iter().map(|c| SolItem::new(*c)).collect(),
            position: Position::default(),
        }
    }

    fn hero() -> Hero {
        let mut hero = Hero::new(ship("imperialSmall", 500.0, &[]));
        hero.ship.position = Position::new(12.5, -4.0);
        hero.add_merc(ship("pirateMedium", 40.7, &["shield", "shield", "armor"]));
        hero.add_merc(ship("imperialSmall", 10.0, &[]));
        hero
    }

    fn loaded_gun() -> SolItem {
        let mut gun = SolItem::gun("gun1", clip1()).equipped_in(2);
        gun.as_gun_mut().unwrap().load();
        gun
    }

    #[test]
    fn test_read_ship_on_fresh_root() {
        let dir = test_dir("fresh");
        let manager = SaveManager::new(ResourceLocator::new(&dir));

        assert!(!manager.has_prev_ship());
        assert!(manager.read_ship(&hulls(), &items()).is_none());
        assert!(manager.load_world().is_none());
        assert!(manager.read_mercenaries(&hulls(), &items()).is_empty());
    }

    #[test]
    fn test_ship_round_trip() {
        let dir = test_dir("ship_round_trip");
        let mut manager = SaveManager::new(ResourceLocator::new(&dir));
        let hulls = hulls();
        let hull = hulls.config("imperialSmall").unwrap();

        manager.write_ships(&hull, 321.9, &[loaded_gun(), SolItem::new("shield")], &hero(), &hulls);

        assert!(manager.has_prev_ship());
        let text = fs::read_to_string(dir.join(SAVE_FILE_NAME)).unwrap();
        assert_eq!(
            text,
            "hull=imperialSmall\nmoney=321\nitems=gun1-2 clip1 shield \nx=12.5\ny=-4\n"
        );

        let config = manager.read_ship(&hulls, &items()).unwrap();
        assert_eq!(config.hull.internal_name, "imperialSmall");
        assert_eq!(config.money, 321);
        assert_eq!(config.spawn_pos, Position::new(12.5, -4.0));
        assert_eq!(config.density, 1.0);
        assert!(config.guard.is_none());
        let empty_gun = SolItem::gun("gun1", clip1()).equipped_in(2);
        assert_eq!(config.items, vec![empty_gun, SolItem::clip(clip1()), SolItem::new("shield")]);

        let spawned: Vec<SolItem> = config.spawn_items().iter().cloned().collect();
        assert_eq!(spawned, vec![loaded_gun(), SolItem::new("shield")]);
    }

    #[test]
    fn test_ship_keeps_spare_clip() {
        let storage = MemoryStorage::new();
        let mut manager = SaveManager::with_storage(ResourceLocator::new("/saves"), storage.clone());
        let hulls = hulls();
        let carried = [SolItem::gun("gun1", clip1()), SolItem::clip(clip1())];

        manager.write_ships(&HullConfig::new("imperialSmall"), 0.0, &carried, &hero(), &hulls);

        let config = manager.read_ship(&hulls, &items()).unwrap();
        assert_eq!(config.items_str, "gun1 clip1 ");
        assert_eq!(config.items.len(), 2);
        assert_eq!(config.items, carried.to_vec());
    }

    #[test]
    fn test_read_ship_unknown_or_missing_hull() {
        let storage = MemoryStorage::new();
        let manager = SaveManager::with_storage(ResourceLocator::new("/saves"), storage.clone());
        let path = Path::new("/saves/prevShip.ini");

        storage.put(path, "money=10\n");
        assert!(manager.read_ship(&hulls(), &items()).is_none());

        storage.put(path, "hull=alienHive\nmoney=10\n");
        assert!(manager.read_ship(&hulls(), &items()).is_none());
    }

    #[test]
    fn test_read_ship_defaults_fields() {
        let storage = MemoryStorage::new();
        let manager = SaveManager::with_storage(ResourceLocator::new("/saves"), storage.clone());
        storage.put(Path::new("/saves/prevShip.ini"), "hull=pirateMedium\nmoney=many\ny=3\n");

        let config = manager.read_ship(&hulls(), &items()).unwrap();
        assert_eq!(config.money, 0);
        assert_eq!(config.items_str, "");
        assert!(config.items.is_empty());
        assert_eq!(config.spawn_pos, Position::new(0.0, 3.0));
    }

    #[test]
    fn test_write_ships_is_idempotent() {
        let dir = test_dir("idempotent");
        let mut manager = SaveManager::new(ResourceLocator::new(&dir));
        let hulls = hulls();
        let hull = hulls.config("imperialSmall").unwrap();
        let hero = hero();
        let items = [loaded_gun()];

        manager.write_ships(&hull, 5.0, &items, &hero, &hulls);
        let ship_first = fs::read(dir.join(SAVE_FILE_NAME)).unwrap();
        let mercs_first = fs::read(dir.join(MERC_SAVE_FILE)).unwrap();

        manager.write_ships(&hull, 5.0, &items, &hero, &hulls);
        assert_eq!(fs::read(dir.join(SAVE_FILE_NAME)).unwrap(), ship_first);
        assert_eq!(fs::read(dir.join(MERC_SAVE_FILE)).unwrap(), mercs_first);
    }

    #[test]
    fn test_mercenary_file_format() {
        let storage = MemoryStorage::new();
        let mut manager = SaveManager::with_storage(ResourceLocator::new("/saves"), storage.clone());
        let hulls = hulls();
        let hull = hulls.config("imperialSmall").unwrap();

        manager.write_ships(&hull, 0.0, &[], &hero(), &hulls);

        let text = storage.get(Path::new("/saves/mercenaries.json")).unwrap();
        let expected = json!([
            { "hull": "pirateMedium", "money": 40, "items": "shield shield armor " },
            { "hull": "imperialSmall", "money": 10, "items": "" }
        ]);
        assert_eq!(text, serde_json::to_string_pretty(&expected).unwrap());
    }

    #[test]
    fn test_mercenary_items_reverse_within_groups() {
        let storage = MemoryStorage::new();
        let mut manager = SaveManager::with_storage(ResourceLocator::new("/saves"), storage.clone());
        let hulls = hulls();
        let mut hero = Hero::new(ship("imperialSmall", 0.0, &[]));
        let mut merc = ship("pirateMedium", 0.0, &[]);
        let mut first = SolItem::new("shield");
        first.equipped = 1;
        merc.items = ItemContainer::from_groups(vec![
            vec![first, SolItem::new("shield")],
            vec![SolItem::new("armor")],
        ]);
        hero.add_merc(merc);

        manager.write_ships(&HullConfig::new("imperialSmall"), 0.0, &[], &hero, &hulls);

        let records = manager.read_mercenary_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].items, "shield shield-1 armor ");
    }

    #[test]
    fn test_removed_mercenary_never_returns() {
        let dir = test_dir("merc_overwrite");
        let mut manager = SaveManager::new(ResourceLocator::new(&dir));
        let hulls = hulls();
        let hull = hulls.config("imperialSmall").unwrap();
        let mut hero = hero();

        manager.write_ships(&hull, 0.0, &[], &hero, &hulls);
        assert_eq!(manager.read_mercenary_records().len(), 2);

        let removed = hero.mercs.remove_where(|m| m.ship.hull.internal_name == "pirateMedium");
        assert_eq!(removed, 1);
        manager.write_ships(&hull, 0.0, &[], &hero, &hulls);

        let records = manager.read_mercenary_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].hull, "imperialSmall");
        let mercs = manager.read_mercenaries(&hulls, &items());
        assert_eq!(mercs.len(), 1);
        assert_eq!(mercs[0].money, 10);
    }

    #[test]
    fn test_read_mercenaries_skips_unknown_hulls() {
        let storage = MemoryStorage::new();
        let manager = SaveManager::with_storage(ResourceLocator::new("/saves"), storage.clone());
        storage.put(
            Path::new("/saves/mercenaries.json"),
            r#"[{"hull": "alienHive", "money": 1, "items": ""},
                {"hull": "pirateMedium", "money": 7, "items": "gun1-1 clip1 "},
                {"money": 3}]"#,
        );

        let mercs = manager.read_mercenaries(&hulls(), &items());
        assert_eq!(mercs.len(), 1);
        assert_eq!(mercs[0].money, 7);
        assert_eq!(mercs[0].items.len(), 2);
        assert_eq!(mercs[0].items[0].equipped, 1);
        let gun = mercs[0].spawn_items().iter().find_map(SolItem::as_gun).cloned().unwrap();
        assert_eq!(gun.ammo, 30);
    }

    #[test]
    fn test_world_round_trip() {
        let dir = test_dir("world");
        let mut manager = SaveManager::new(ResourceLocator::new(&dir));

        for (seed, systems) in [(0u64, 0u32), (1_234_567_890_123, 6), (u64::MAX, u32::MAX)] {
            manager.save_world(&GameRandom::with_seed(seed), systems).unwrap();
            assert_eq!(manager.load_world(), Some(WorldConfig::new(seed, systems)));
        }
    }

    #[test]
    fn test_world_file_is_pretty() {
        let storage = MemoryStorage::new();
        let mut manager = SaveManager::with_storage(ResourceLocator::new("/saves"), storage.clone());

        manager.save_world(&GameRandom::with_seed(42), 3).unwrap();

        assert_eq!(
            storage.get(Path::new("/saves/world.json")).unwrap(),
            "{\n  \"seed\": 42,\n  \"systems\": 3\n}"
        );
        assert_eq!(storage.get(Path::new("/saves/worldExtra.json")).unwrap(), "{}");
    }

    #[test]
    fn test_load_world_lenient_and_corrupt() {
        let storage = MemoryStorage::new();
        let manager = SaveManager::with_storage(ResourceLocator::new("/saves"), storage.clone());
        let path = Path::new("/saves/world.json");

        storage.put(path, "{\"seed\": \"99\"}\n\n");
        assert_eq!(manager.load_world(), Some(WorldConfig::new(99, 0)));

        storage.put(path, "{\"seed\": ");
        assert_eq!(manager.load_world(), None);
    }

    #[test]
    fn test_save_world_failure_skips_extra() {
        let storage = MemoryStorage::new();
        let mut manager = SaveManager::with_storage(ResourceLocator::new("/saves"), storage.clone());
        manager.save_world_json("galaxy", json!({ "planets": 9 }));
        storage.fail_writes_to(Path::new("/saves/world.json"));

        let result = manager.save_world(&GameRandom::with_seed(1), 2);

        assert!(matches!(result, Err(SaveError::Io { .. })));
        assert!(storage.get(Path::new("/saves/worldExtra.json")).is_none());
    }

    #[test]
    fn test_write_ships_tolerates_failures() {
        let storage = MemoryStorage::new();
        let mut manager = SaveManager::with_storage(ResourceLocator::new("/saves"), storage.clone());
        let hulls = hulls();
        storage.fail_all_writes();

        manager.write_ships(&HullConfig::new("imperialSmall"), 1.0, &[], &hero(), &hulls);

        assert!(!manager.has_prev_ship());
    }

    #[test]
    fn test_merc_failure_still_writes_ship() {
        let storage = MemoryStorage::new();
        let mut manager = SaveManager::with_storage(ResourceLocator::new("/saves"), storage.clone());
        let hulls = hulls();
        manager.save_player_json("modA", json!({ "kills": 2 }));
        storage.fail_writes_to(Path::new("/saves/mercenaries.json"));

        manager.write_ships(&HullConfig::new("imperialSmall"), 8.0, &[], &hero(), &hulls);

        assert!(storage.get(Path::new("/saves/mercenaries.json")).is_none());
        assert!(storage.get(Path::new("/saves/prevShipExtra.json")).is_some());
        assert!(manager.has_prev_ship());
        assert_eq!(manager.read_ship(&hulls, &items()).unwrap().money, 8);
    }

    #[test]
    fn test_ship_failure_still_writes_mercs() {
        let storage = MemoryStorage::new();
        let mut manager = SaveManager::with_storage(ResourceLocator::new("/saves"), storage.clone());
        let hulls = hulls();
        storage.fail_writes_to(Path::new("/saves/prevShip.ini"));

        manager.write_ships(&HullConfig::new("imperialSmall"), 8.0, &[], &hero(), &hulls);

        assert!(!manager.has_prev_ship());
        assert_eq!(manager.read_mercenary_records().len(), 2);
        assert!(storage.get(Path::new("/saves/prevShipExtra.json")).is_some());
    }

    #[test]
    fn test_extra_data_isolation() {
        let storage = MemoryStorage::new();
        let mut manager = SaveManager::with_storage(ResourceLocator::new("/saves"), storage.clone());
        let x = json!({ "reputation": [1, 2, 3] });

        manager.save_player_json("modA", x.clone());

        assert_eq!(manager.load_player_json("modB"), None);
        assert_eq!(manager.load_player_json("modA"), Some(&x));
        assert_eq!(manager.load_world_json("modA"), None);
    }

    #[test]
    fn test_world_extra_loaded_once() {
        let storage = MemoryStorage::new();
        let mut manager = SaveManager::with_storage(ResourceLocator::new("/saves"), storage.clone());
        storage.put(
            Path::new("/saves/worldExtra.json"),
            r#"{"stations": {"count": 4}, "faction": "pirates"}"#,
        );

        assert_eq!(manager.load_world_json("stations"), Some(&json!({ "count": 4 })));
        assert_eq!(manager.load_world_json("faction"), Some(&json!("pirates")));
        assert_eq!(storage.reads(), 1);
    }

    #[test]
    fn test_player_extra_survives_restart() {
        let dir = test_dir("player_extra");
        let hulls = hulls();
        {
            let mut manager = SaveManager::new(ResourceLocator::new(&dir));
            manager.save_player_json("quests", json!({ "done": ["tutorial"] }));
            manager.write_ships(&HullConfig::new("imperialSmall"), 0.0, &[], &hero(), &hulls);
        }

        let mut manager = SaveManager::new(ResourceLocator::new(&dir));
        assert_eq!(
            manager.load_player_json("quests"),
            Some(&json!({ "done": ["tutorial"] }))
        );
    }
}
