//! Ability keyword sets used to infer a role when no role tag is present.
//!
//! Keys are lower-cased ability names. Sets are checked healing, tank, dps.

use phf::phf_set;

pub static HEALING_ABILITIES: phf::Set<&'static str> = phf_set! {
    "grand healing",
    "illustrious healing",
    "healing springs",
    "regeneration",
    "rapid regeneration",
    "radiating regeneration",
    "mutagen",
    "blessing of protection",
    "blessing of restoration",
    "combat prayer",
    "healing ward",
    "breath of life",
    "healing ritual",
    "ritual of rebirth",
    "radiant aura",
    "healing seed",
    "budding seeds",
    "living trellis",
    "lotus blossom",
    "enchanted growth",
    "healing thicket",
    "spirit mender",
    "spirit guardian",
    "intensive mender",
    "runemend",
    "evolving runemend",
    "audacious runemend",
    "remedy cascade",
    "cascading fortune",
};

pub static TANK_ABILITIES: phf::Set<&'static str> = phf_set! {
    "pierce armor",
    "inner fire",
    "inner rage",
    "inner beast",
    "defensive posture",
    "absorb missile",
    "spell wall",
    "shielded assault",
    "unstoppable brute",
    "immovable",
    "silver leash",
    "hardened armor",
    "igneous shield",
    "beckoning armor",
    "summoner's armor",
    "ice fortress",
    "runic defense",
    "runeguard of freedom",
    "gibbering shield",
    "sanctum of the abyssal sea",
    "frost clench",
};

pub static DPS_ABILITIES: phf::Set<&'static str> = phf_set! {
    "barbed trap",
    "deadly cloak",
    "quick cloak",
    "camouflaged hunter",
    "merciless resolve",
    "relentless focus",
    "blighted blastbones",
    "stalking blastbones",
    "exhausting fatecarver",
    "pragmatic fatecarver",
    "unstable wall of elements",
    "elemental blockade",
    "endless hail",
    "arrow barrage",
    "rapid strikes",
    "flurry",
    "rending slashes",
    "bloodthirst",
    "crystal fragments",
    "crushing shock",
    "force pulse",
    "biting jabs",
    "puncturing sweep",
    "dark flare",
    "wrecking blow",
    "carve",
    "brawler",
    "stampede",
    "executioner",
    "reverse slice",
    "flames of oblivion",
    "molten whip",
    "noxious breath",
    "engulfing flames",
    "venomous claw",
};
