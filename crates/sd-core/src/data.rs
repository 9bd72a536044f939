//! Static content tables
//!
//! Inert rule-book data: languages, spell lists, deities, loot and flavor
//! text. Producers draw from these; nothing here rolls dice or mutates.

/// Languages in common circulation
pub static COMMON_LANGUAGES: &[&str] = &[
    "dwarvish",
    "elvish",
    "giant",
    "goblin",
    "merran",
    "orchish",
    "reptilian",
    "sylvan",
    "thanian",
];

/// Languages few mortals ever learn
pub static RARE_LANGUAGES: &[&str] = &["celestial", "primordial", "diabolic", "draconic"];

pub static CLERIC_SPELLS: &[&str] = &[
    "cure wounds",
    "light",
    "shield of faith",
    "protection from evil",
    "holy weapon",
];

pub static WIZARD_SPELLS: &[&str] = &[
    "alarm",
    "burning hands",
    "charm person",
    "detect magic",
    "feather fall",
    "floating disk",
    "hold portal",
    "light",
    "magic missile",
    "protection from evil",
    "sleep",
];

pub static WITCH_SPELLS: &[&str] = &[
    "cauldron",
    "charm person",
    "eyebite",
    "fog",
    "hypnotize",
    "oak, ash, thorn",
    "puppet",
    "shadowdance",
    "willowman",
    "witchlight",
];

pub static LAWFUL_GODS: &[&str] = &["St. Terragnis", "Madeera the Covenant"];
pub static NEUTRAL_GODS: &[&str] = &["Gede", "Ord"];

/// Magic items a wizard can start with
pub static MAGIC_ITEMS: &[&str] = &[
    "bag of holding",
    "bracers of defense",
    "boots of the cat",
    "braks cube of perfection",
    "cloak of elvenkind",
    "jewel of barbalt",
    "gauntlets of might",
    "kytherian cog",
    "immovable rod",
    "ophidian armor",
    "pearl of power",
    "potion of healing",
    "potion of extirpation",
    "potion of invisibility",
    "scarab of protection",
    "sword of the ancients",
    "shortsword of the thief",
    "staff of healing",
    "true name",
];

/// The standard adventuring bundle, one gear line per item
pub static CRAWLING_KIT: &[&str] = &[
    "backpack",
    "flint and steel",
    "2x torches",
    "3x rations",
    "10x iron spikes",
    "grappling hook",
    "rope, 60 feet",
];

/// One background is drawn per character, verbatim
pub static BACKGROUNDS: &[&str] = &[
    "urchin: grew up in a bad part of a city",
    "wanted: bounty on you, you have friends",
    "cult initiate: knows grim secrets and rituals",
    "thieves' guild: connections, contacts, debts",
    "banished: cast out for supposed crimes",
    "orphaned: raise by unusual guardian",
    "wizard's apprentice: eye for magic",
    "jeweler: expert in jewelry",
    "herbalist: expert in plants, medicines, poisons",
    "barbarian: once in the horde",
    "mercenary: hired to fight for coin",
    "sailor: good with ships",
    "acolyte: trained in rites and doctrines",
    "soldier: trained in organized army",
    "ranger: good in wilderness",
    "scout: good at stealth, observation, speed",
    "minstrel: traveler, good at song, dance, and comedy",
    "scholar: know ancient history and lore",
    "noble: famous name, noble birth",
    "chirurgeon: know anatomy surgery, and first aid",
];
