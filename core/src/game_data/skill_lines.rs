//! ESO Class Skill Lines and Role Mapping
//!
//! Maps slotted ability names to the class skill line ("subclass") they belong
//! to, and skill lines to their short abbreviation used in build identities.
//! Ability tables cover the ultimate, the five actives and both morphs of each.

use hashbrown::HashMap;
use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Player role in group content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Dps,
    Healer,
    Tank,
    /// No authoritative tag and not yet classified
    #[default]
    Unknown,
}

impl Role {
    /// Parse the role tag attached to a telemetry record ("dps", "healers", "Tank", ...)
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "dps" | "damage" => Some(Role::Dps),
            "healer" | "healers" | "heal" => Some(Role::Healer),
            "tank" | "tanks" => Some(Role::Tank),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Dps => "dps",
            Role::Healer => "healer",
            Role::Tank => "tank",
            Role::Unknown => "unknown",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Role::Dps => "DPS",
            Role::Healer => "Healer",
            Role::Tank => "Tank",
            Role::Unknown => "Unknown",
        }
    }

    /// Tanks and healers are published with a lower population threshold
    pub const fn is_support(&self) -> bool {
        matches!(self, Role::Tank | Role::Healer)
    }
}

/// Class skill line. Declaration order is detection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillLine {
    // Dragonknight
    ArdentFlame,
    DraconicPower,
    EarthenHeart,
    // Sorcerer
    DarkMagic,
    DaedricSummoning,
    StormCalling,
    // Nightblade
    Assassination,
    Shadow,
    Siphoning,
    // Templar
    AedricSpear,
    DawnsWrath,
    RestoringLight,
    // Warden
    AnimalCompanions,
    GreenBalance,
    WintersEmbrace,
    // Necromancer
    BoneTyrant,
    GraveLord,
    LivingDeath,
    // Arcanist
    HeraldOfTheTome,
    SoldierOfApocrypha,
    CurativeRuneforms,
}

impl SkillLine {
    /// Every skill line in table declaration order
    pub const ALL: [SkillLine; 21] = {
        use SkillLine::*;
        [
            ArdentFlame,
            DraconicPower,
            EarthenHeart,
            DarkMagic,
            DaedricSummoning,
            StormCalling,
            Assassination,
            Shadow,
            Siphoning,
            AedricSpear,
            DawnsWrath,
            RestoringLight,
            AnimalCompanions,
            GreenBalance,
            WintersEmbrace,
            BoneTyrant,
            GraveLord,
            LivingDeath,
            HeraldOfTheTome,
            SoldierOfApocrypha,
            CurativeRuneforms,
        ]
    };

    pub const fn name(&self) -> &'static str {
        use SkillLine::*;
        match self {
            ArdentFlame => "Ardent Flame",
            DraconicPower => "Draconic Power",
            EarthenHeart => "Earthen Heart",
            DarkMagic => "Dark Magic",
            DaedricSummoning => "Daedric Summoning",
            StormCalling => "Storm Calling",
            Assassination => "Assassination",
            Shadow => "Shadow",
            Siphoning => "Siphoning",
            AedricSpear => "Aedric Spear",
            DawnsWrath => "Dawn's Wrath",
            RestoringLight => "Restoring Light",
            AnimalCompanions => "Animal Companions",
            GreenBalance => "Green Balance",
            WintersEmbrace => "Winter's Embrace",
            BoneTyrant => "Bone Tyrant",
            GraveLord => "Grave Lord",
            LivingDeath => "Living Death",
            HeraldOfTheTome => "Herald of the Tome",
            SoldierOfApocrypha => "Soldier of Apocrypha",
            CurativeRuneforms => "Curative Runeforms",
        }
    }

    /// Healing-focused lines; a player running one defaults to healer
    pub const fn is_support(&self) -> bool {
        matches!(
            self,
            SkillLine::RestoringLight
                | SkillLine::GreenBalance
                | SkillLine::LivingDeath
                | SkillLine::CurativeRuneforms
        )
    }

    /// Short form used in build identities ("Assassination" -> "Ass")
    pub fn abbreviation(&self) -> &'static str {
        abbreviate(self.name())
    }

    pub fn from_abbreviation(abbreviation: &str) -> Option<Self> {
        SkillLine::ALL
            .into_iter()
            .find(|line| line.abbreviation().eq_ignore_ascii_case(abbreviation))
    }

    /// Ultimate, actives and morphs belonging to this line
    pub const fn abilities(&self) -> &'static [&'static str] {
        use SkillLine::*;
        match self {
            ArdentFlame => &[
                "Dragonknight Standard", "Shifting Standard", "Standard of Might",
                "Lava Whip", "Molten Whip", "Flame Lash",
                "Searing Strike", "Venomous Claw", "Burning Embers",
                "Fiery Breath", "Noxious Breath", "Engulfing Flames",
                "Fiery Grip", "Chains of Devastation", "Unrelenting Grip",
                "Inferno", "Flames of Oblivion", "Cauterize",
            ],
            DraconicPower => &[
                "Dragon Leap", "Ferocious Leap", "Take Flight",
                "Spiked Armor", "Hardened Armor", "Volatile Armor",
                "Dark Talons", "Burning Talons", "Choking Talons",
                "Dragon Blood", "Green Dragon Blood", "Coagulating Blood",
                "Protective Scale", "Dragon Fire Scale", "Protective Plate",
                "Inhale", "Deep Breath", "Draw Essence",
            ],
            EarthenHeart => &[
                "Magma Armor", "Magma Shell", "Corrosive Armor",
                "Stonefist", "Stone Giant", "Obsidian Shard",
                "Molten Weapons", "Igneous Weapons", "Molten Armaments",
                "Obsidian Shield", "Igneous Shield", "Fragmented Shield",
                "Petrify", "Fossilize", "Shattering Rocks",
                "Ash Cloud", "Cinder Storm", "Eruption",
            ],
            DarkMagic => &[
                "Negate Magic", "Suppression Field", "Absorption Field",
                "Crystal Shard", "Crystal Fragments", "Crystal Weapon",
                "Encase", "Shattering Spines", "Vibrant Shroud",
                "Rune Prison", "Rune Cage", "Defensive Rune",
                "Dark Exchange", "Dark Deal", "Dark Conversion",
                "Daedric Mines", "Daedric Tomb", "Daedric Refuge",
            ],
            DaedricSummoning => &[
                "Summon Storm Atronach", "Greater Storm Atronach", "Summon Charged Atronach",
                "Summon Unstable Familiar", "Summon Unstable Clannfear", "Summon Volatile Familiar",
                "Daedric Curse", "Daedric Prey", "Haunting Curse",
                "Summon Winged Twilight", "Summon Twilight Tormentor", "Summon Twilight Matriarch",
                "Conjured Ward", "Hardened Ward", "Regenerative Ward",
                "Bound Armor", "Bound Armaments", "Bound Aegis",
            ],
            StormCalling => &[
                "Overload", "Power Overload", "Energy Overload",
                "Mages' Fury", "Mages' Wrath", "Endless Fury",
                "Lightning Form", "Hurricane", "Boundless Storm",
                "Lightning Splash", "Liquid Lightning", "Lightning Flood",
                "Surge", "Power Surge", "Critical Surge",
                "Bolt Escape", "Streak", "Ball of Lightning",
            ],
            Assassination => &[
                "Death Stroke", "Incapacitating Strike", "Soul Harvest",
                "Assassin's Blade", "Killer's Blade", "Impale",
                "Teleport Strike", "Ambush", "Lotus Fan",
                "Blur", "Mirage", "Phantasmal Escape",
                "Mark Target", "Piercing Mark", "Reaper's Mark",
                "Grim Focus", "Relentless Focus", "Merciless Resolve",
            ],
            Shadow => &[
                "Consuming Darkness", "Bolstering Darkness", "Veil of Blades",
                "Shadow Cloak", "Shadowy Disguise", "Dark Cloak",
                "Veiled Strike", "Surprise Attack", "Concealed Weapon",
                "Path of Darkness", "Twisting Path", "Refreshing Path",
                "Aspect of Terror", "Mass Hysteria", "Manifestation of Terror",
                "Summon Shade", "Dark Shade", "Shadow Image",
            ],
            Siphoning => &[
                "Soul Shred", "Soul Siphon", "Soul Tether",
                "Strife", "Funnel Health", "Swallow Soul",
                "Malevolent Offering", "Healthy Offering", "Shrewd Offering",
                "Cripple", "Debilitate", "Crippling Grasp",
                "Siphoning Strikes", "Leeching Strikes", "Siphoning Attacks",
                "Drain Power", "Power Extraction", "Sap Essence",
            ],
            AedricSpear => &[
                "Radial Sweep", "Crescent Sweep", "Everlasting Sweep",
                "Puncturing Strikes", "Biting Jabs", "Puncturing Sweep",
                "Piercing Javelin", "Aurora Javelin", "Binding Javelin",
                "Focused Charge", "Explosive Charge", "Toppling Charge",
                "Spear Shards", "Luminous Shards", "Blazing Spear",
                "Sun Shield", "Radiant Ward", "Blazing Shield",
            ],
            DawnsWrath => &[
                "Nova", "Solar Prison", "Solar Disturbance",
                "Sun Fire", "Vampire's Bane", "Reflective Light",
                "Solar Flare", "Dark Flare", "Solar Barrage",
                "Backlash", "Purifying Light", "Power of the Light",
                "Eclipse", "Total Dark", "Unstable Core",
                "Radiant Destruction", "Radiant Glory", "Radiant Oppression",
            ],
            RestoringLight => &[
                "Rite of Passage", "Practiced Incantation", "Remembrance",
                "Rushed Ceremony", "Breath of Life", "Honor the Dead",
                "Healing Ritual", "Hasty Prayer", "Ritual of Rebirth",
                "Restoring Aura", "Radiant Aura", "Repentance",
                "Cleansing Ritual", "Extended Ritual", "Ritual of Retribution",
                "Rune Focus", "Channeled Focus", "Restoring Focus",
            ],
            AnimalCompanions => &[
                "Feral Guardian", "Eternal Guardian", "Wild Guardian",
                "Dive", "Cutting Dive", "Screaming Cliff Racer",
                "Scorch", "Subterranean Assault", "Deep Fissure",
                "Swarm", "Fetcher Infection", "Growing Swarm",
                "Betty Netch", "Blue Betty", "Bull Netch",
                "Falcon's Swiftness", "Deceptive Predator", "Bird of Prey",
            ],
            GreenBalance => &[
                "Secluded Grove", "Enchanted Forest", "Healing Thicket",
                "Fungal Growth", "Enchanted Growth", "Soothing Spores",
                "Healing Seed", "Budding Seeds", "Corrupting Pollen",
                "Living Vines", "Leeching Vines", "Living Trellis",
                "Lotus Flower", "Green Lotus", "Lotus Blossom",
                "Nature's Grasp", "Bursting Vines", "Nature's Embrace",
            ],
            WintersEmbrace => &[
                "Sleet Storm", "Northern Storm", "Permafrost",
                "Frost Cloak", "Expansive Frost Cloak", "Ice Fortress",
                "Impaling Shards", "Gripping Shards", "Winter's Revenge",
                "Arctic Wind", "Arctic Blast", "Polar Wind",
                "Crystallized Shield", "Crystallized Slab", "Shimmering Shield",
                "Frozen Gate", "Frozen Device", "Frozen Retreat",
            ],
            BoneTyrant => &[
                "Bone Goliath Transformation", "Pummeling Goliath", "Ravenous Goliath",
                "Death Scythe", "Ruinous Scythe", "Hungry Scythe",
                "Bone Armor", "Beckoning Armor", "Summoner's Armor",
                "Bitter Harvest", "Deaden Pain", "Necrotic Potency",
                "Bone Totem", "Remote Totem", "Agony Totem",
                "Grave Grasp", "Ghostly Embrace", "Empowering Grasp",
            ],
            GraveLord => &[
                "Frozen Colossus", "Glacial Colossus", "Pestilent Colossus",
                "Flame Skull", "Ricochet Skull", "Venom Skull",
                "Blastbones", "Blighted Blastbones", "Stalking Blastbones",
                "Boneyard", "Unnerving Boneyard", "Avid Boneyard",
                "Skeletal Mage", "Skeletal Archer", "Skeletal Arcanist",
                "Shocking Siphon", "Detonating Siphon", "Mystic Siphon",
            ],
            LivingDeath => &[
                "Reanimate", "Renewing Animation", "Animate Blastbones",
                "Render Flesh", "Resistant Flesh", "Blood Sacrifice",
                "Expunge", "Expunge and Modify", "Hexproof",
                "Life amid Death", "Renewing Undeath", "Enduring Undeath",
                "Restoring Tether", "Braided Tether", "Mortal Coil",
                "Spirit Mender", "Spirit Guardian", "Intensive Mender",
            ],
            HeraldOfTheTome => &[
                "The Unblinking Eye", "The Languid Eye", "Tide King's Gaze",
                "Runeblades", "Writhing Runeblades", "Escalating Runeblades",
                "Fatecarver", "Exhausting Fatecarver", "Pragmatic Fatecarver",
                "Abyssal Impact", "Cephaliarch's Flail", "Tentacular Dread",
                "Tome-Bearer's Inspiration", "Inspired Scholarship", "Recuperative Treatise",
                "The Imperfect Ring", "Rune of Displacement", "Fulminating Rune",
            ],
            SoldierOfApocrypha => &[
                "Gibbering Shield", "Sanctum of the Abyssal Sea", "Gibbering Shelter",
                "Runic Defense", "Runeguard of Freedom", "Runeguard of Still Waters",
                "Rune of Eldritch Horror", "Rune of Uncanny Adoration",
                "Rune of the Colorless Pool",
                "Runespite Ward", "Spiteward of the Lucid Mind", "Impervious Runeward",
                "Fatewoven Armor", "Cruxweaver Armor", "Unbreakable Fate",
                "Runic Jolt", "Runic Sunder", "Runic Embrace",
            ],
            CurativeRuneforms => &[
                "Vitalizing Glyphic", "Glyphic of the Tides", "Resonating Glyphic",
                "Runemend", "Evolving Runemend", "Audacious Runemend",
                "Remedy Cascade", "Cascading Fortune", "Curative Surge",
                "Chakram Shields", "Chakram of Destiny", "Tidal Chakram",
                "Apocryphal Gate", "Fleet-footed Gate", "Passage Between Worlds",
                "Arcanist's Domain", "Reconstructive Domain", "Zenas' Empowering Disc",
            ],
        }
    }
}

/// Explicit skill line abbreviations
static ABBREVIATIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "Ardent Flame" => "Ardent",
    "Draconic Power" => "Draconic",
    "Earthen Heart" => "Earthen",
    "Dark Magic" => "Dark",
    "Daedric Summoning" => "Daedric",
    "Storm Calling" => "Storm",
    "Assassination" => "Ass",
    "Shadow" => "Shadow",
    "Siphoning" => "Siphon",
    "Aedric Spear" => "Spear",
    "Dawn's Wrath" => "Dawn",
    "Restoring Light" => "Resto",
    "Animal Companions" => "Animal",
    "Green Balance" => "Green",
    "Winter's Embrace" => "Winter",
    "Bone Tyrant" => "Bone",
    "Grave Lord" => "Grave",
    "Living Death" => "Living",
    "Herald of the Tome" => "Herald",
    "Soldier of Apocrypha" => "Soldier",
    "Curative Runeforms" => "Curative",
};

/// Abbreviate a skill line name. Unlisted names fall back to their first
/// word truncated to 6 characters.
pub fn abbreviate(skill_line: &str) -> &str {
    if let Some(abbr) = ABBREVIATIONS.get(skill_line) {
        return abbr;
    }
    match skill_line.split_whitespace().next() {
        Some(word) => match word.char_indices().nth(6) {
            Some((idx, _)) => &word[..idx],
            None => word,
        },
        None => "x",
    }
}

/// Lower-cased ability name -> skill line. When an ability appears in several
/// lines the first declared line owns it.
static ABILITY_INDEX: LazyLock<HashMap<String, SkillLine>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for line in SkillLine::ALL {
        for ability in line.abilities() {
            map.entry(ability.to_lowercase()).or_insert(line);
        }
    }
    map
});

/// Lower-cased ability tables in declaration order, for substring scans
pub(crate) static LOWERCASE_TABLES: LazyLock<Vec<(SkillLine, Vec<String>)>> =
    LazyLock::new(|| {
        SkillLine::ALL
            .into_iter()
            .map(|line| {
                let names = line.abilities().iter().map(|a| a.to_lowercase()).collect();
                (line, names)
            })
            .collect()
    });

/// Look up the skill line an ability belongs to: exact name first, then
/// bidirectional substring match against the table (for renamed morphs).
pub fn skill_line_for_ability(ability_name: &str) -> Option<SkillLine> {
    let needle = ability_name.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    if let Some(line) = ABILITY_INDEX.get(&needle) {
        return Some(*line);
    }
    LOWERCASE_TABLES.iter().find_map(|(line, names)| {
        names
            .iter()
            .any(|known| known.contains(&needle) || needle.contains(known.as_str()))
            .then_some(*line)
    })
}
