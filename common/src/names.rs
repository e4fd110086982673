//! Display names for the internal item and hero identifiers found in replays.

use once_cell::sync::Lazy;
use std::collections::HashMap;

const BASIC_ITEMS: &[(&str, &str)] = &[
    ("item_aegis", "Aegis of the Immortal"),
    ("item_courier", "Animal Courier"),
    ("item_boots_of_elves", "Band of Elvenskin"),
    ("item_belt_of_strength", "Belt of Strength"),
    ("item_blade_of_alacrity", "Blade of Alacrity"),
    ("item_blades_of_attack", "Blades of Attack"),
    ("item_blight_stone", "Blight Stone"),
    ("item_blink", "Blink Dagger"),
    ("item_boots", "Boots of Speed"),
    ("item_bottle", "Bottle"),
    ("item_broadsword", "Broadsword"),
    ("item_chainmail", "Chainmail"),
    ("item_cheese", "Cheese"),
    ("item_circlet", "Circlet"),
    ("item_clarity", "Clarity"),
    ("item_claymore", "Claymore"),
    ("item_cloak", "Cloak"),
    ("item_demon_edge", "Demon Edge"),
    ("item_dust", "Dust of Appearance"),
    ("item_eagle", "Eaglesong"),
    ("item_enchanted_mango", "Enchanted Mango"),
    ("item_energy_booster", "Energy Booster"),
    ("item_faerie_fire", "Faerie Fire"),
    ("item_flying_courier", "Flying Courier"),
    ("item_gauntlets", "Gauntlets of Strength"),
    ("item_gem", "Gem of True Sight"),
    ("item_ghost", "Ghost Sceptre"),
    ("item_gloves", "Gloves of Haste"),
    ("item_flask", "Healing Salve"),
    ("item_helm_of_iron_will", "Helm of Iron Will"),
    ("item_hyperstone", "Hyperstone"),
    ("item_infused_raindrop", "Infused Raindrop"),
    ("item_branches", "Iron Branch"),
    ("item_javelin", "Javelin"),
    ("item_magic_stick", "Magic Stick"),
    ("item_mantle", "Mantle of Intelligence"),
    ("item_mithril_hammer", "Mithril Hammer"),
    ("item_lifesteal", "Morbid Mask"),
    ("item_mystic_staff", "Mystic Staff"),
    ("item_ward_observer", "Observer Ward"),
    ("item_ogre_axe", "Ogre Club"),
    ("item_orb_of_venom", "Orb of Venom"),
    ("item_platemail", "Platemail"),
    ("item_point_booster", "Point Booster"),
    ("item_quarterstaff", "Quarterstaff"),
    ("item_quelling_blade", "Quelling Blade"),
    ("item_reaver", "Reaver"),
    ("item_ring_of_health", "Ring of Health"),
    ("item_ring_of_protection", "Ring of Protection"),
    ("item_ring_of_regen", "Ring of Regen"),
    ("item_robe", "Robe of the Magi"),
    ("item_relic", "Sacred Relic"),
    ("item_sobi_mask", "Sage's Mask"),
    ("item_ward_sentry", "Sentry Ward"),
    ("item_shadow_amulet", "Shadow Amulet"),
    ("item_slippers", "Slippers of Agility"),
    ("item_smoke_of_deceit", "Smoke of Deceit"),
    ("item_staff_of_wizardry", "Staff of Wizardry"),
    ("item_stout_shield", "Stout Shield"),
    ("item_talisman_of_evasion", "Talisman of Evasion"),
    ("item_tango", "Tango"),
    ("item_tango_single", "Tango (Shared)"),
    ("item_tome_of_knowledge", "Tome of Knowledge"),
    ("item_tpscroll", "Town Portal Scroll"),
    ("item_ultimate_orb", "Ultimate Orb"),
    ("item_vitality_booster", "Vitality Booster"),
    ("item_void_stone", "Void Stone"),
    ("item_wind_lace", "Wind Lace"),
];

const UPGRADED_ITEMS: &[(&str, &str)] = &[
    ("item_abyssal_blade", "Abyssal Blade"),
    ("item_recipe_abyssal_blade", "Abyssal Blade Recipe"),
    ("item_aether_lens", "Aether Lens"),
    ("item_recipe_aether_lens", "Aether Lens Recipe"),
    ("item_ultimate_scepter", "Aghanim's Scepter"),
    ("item_recipe_ultimate_scepter", "Aghanim's Scepter Recipe"),
    ("item_arcane_boots", "Arcane Boots"),
    ("item_recipe_arcane_boots", "Arcane Boots Recipe"),
    ("item_armlet", "Armlet of Mordiggian"),
    ("item_recipe_armlet", "Armlet of Mordiggian Recipe"),
    ("item_assault", "Assault Cuirass"),
    ("item_recipe_assault", "Assault Cuirass Recipe"),
    ("item_bfury", "Battle Fury"),
    ("item_recipe_bfury", "Battle Fury Recipe"),
    ("item_black_king_bar", "Black King Bar"),
    ("item_recipe_black_king_bar", "Black King Bar Recipe"),
    ("item_blade_mail", "Blade Mail"),
    ("item_recipe_blade_mail", "Blade Mail Recipe"),
    ("item_bloodstone", "Bloodstone"),
    ("item_recipe_bloodstone", "Bloodstone Recipe"),
    ("item_bloodthorn", "Bloodthorn"),
    ("item_recipe_bloodthorn", "Bloodthorn Recipe"),
    ("item_travel_boots", "Boots of Travel (Level 1)"),
    ("item_travel_boots_2", "Boots of Travel (Level 2)"),
    ("item_recipe_travel_boots", "Boots of Travel Recipe"),
    ("item_bracer", "Bracer"),
    ("item_recipe_bracer", "Bracer Recipe"),
    ("item_buckler", "Buckler"),
    ("item_recipe_buckler", "Buckler Recipe"),
    ("item_butterfly", "Butterfly"),
    ("item_recipe_butterfly", "Butterfly Recipe"),
    ("item_crimson_guard", "Crimson Guard"),
    ("item_recipe_crimson_guard", "Crimson Guard Recipe"),
    ("item_lesser_crit", "Crystalys"),
    ("item_recipe_lesser_crit", "Crystalys Recipe"),
    ("item_greater_crit", "Daedalus"),
    ("item_recipe_greater_crit", "Daedalus Recipe"),
    ("item_dagon_#1", "Dagon (Level 1)"),
    ("item_dagon_#2", "Dagon (Level 2)"),
    ("item_dagon_#3", "Dagon (Level 3)"),
    ("item_dagon_#4", "Dagon (Level 4)"),
    ("item_dagon_#5", "Dagon (Level 5)"),
    ("item_recipe_dagon", "Dagon Recipe"),
    ("item_desolator", "Desloator"),
    ("item_recipe_desolator", "Desolator Recipe"),
    ("item_diffusal_blade", "Diffusal Blade (Level 1)"),
    ("item_diffusal_blade_2", "Diffusal Blade (Level 2)"),
    ("item_recipe_diffusal_blade", "Diffusal Blade Recipe"),
    ("item_dragon_lance", "Dragon Lance"),
    ("item_recipe_dragon_lance", "Dragon Lance Recipe"),
    ("item_ancient_janggo", "Drum of Endurance"),
    ("item_recipe_ancient_janggo", "Drum of Endurance Recipe"),
    ("item_echo_sabre", "Echo Sabre"),
    ("item_recipe_echo_sabre", "Echo Sabre Recipe"),
    ("item_ethereal_blade", "Ethereal Blade"),
    ("item_ethereal_blade_recipe", "Ethereal Blade Recipe"),
    ("item_cyclone", "Eul's Sceptre of Divinity"),
    ("item_recipe_cyclone", "Eul's Sceptre of Divinity Recipe"),
    ("item_skadi", "Eye of Skadi"),
    ("item_recipe_skadi", "Eye of Skadi Recipe"),
    ("item_force_staff", "Force Staff"),
    ("item_recipe_force_staff", "Force Staff Recipe"),
    ("item_glimmer_cape", "Glimmer Cape"),
    ("item_recipe_glimmer_cape", "Glimmer Cape Recipe"),
    ("item_guardian_greaves", "Guardian Greaves"),
    ("item_recipe_guardian_greaves", "Guardian Greaves Recipe"),
    ("item_hand_of_midas", "Hand of Midas"),
    ("item_recipe_hand_of_midas", "Hand of Midas Recipe"),
    ("item_headdress", "Headdress"),
    ("item_recipe_headdress", "Headdress Recipe"),
    ("item_heart", "Heart of Tarrasque"),
    ("item_recipe_heart", "Heart of Tarrasque Recipe"),
    ("item_heavens_halberd", "Heaven's Halberd"),
    ("item_recipe_heavens_halberd", "Heaven's Halberd Recipe"),
    ("item_helm_of_the_dominator", "Helm of the Dominator"),
    ("item_recipe_helm_of_the_dominator", "Helm of the Dominator Recipe"),
    ("item_hood_of_defiance", "Hood of Defiance"),
    ("item_recipe_hood_of_defiance", "Hood of Defiance Recipe"),
    ("item_hurricane_pike", "Hurricane Pike"),
    ("item_recipe_hurricane_pike", "Hurricane Pike Recipe"),
    ("item_iron_talon", "Iron Talon"),
    ("item_recipe_iron_talon", "Iron Talon Recipe"),
    ("item_sphere", "Linken's Sphere"),
    ("item_recipe_sphere", "Linken's Sphere Recipe"),
    ("item_lotus_orb", "Lotus Orb"),
    ("item_recipe_lotus_orb", "Lotus Orb Recipe"),
    ("item_maelstrom", "Malestrom"),
    ("item_recipe_maelstrom", "Maelstrom Recipe"),
    ("item_magic_wand", "Magic Wand"),
    ("item_recipe_magic_wand", "Magic Wand Recipe"),
    ("item_manta", "Manta Style"),
    ("item_recipe_manta", "Manta Style Recipe"),
    ("item_mask_of_madness", "Mask of Madness"),
    ("item_recipe_mask_of_madness", "Mask of Madness Recipe"),
    ("item_medallion_of_courage", "Medallion of Courage"),
    ("item_recipe_medallion_of_courage", "Medallion of Courage Recipe"),
    ("item_mekansm", "Mekansm"),
    ("item_recipe_mekansm", "Mekansm Recipe"),
    ("item_mjollnir", "Mjollnir"),
    ("item_recipe_mjollnir", "Mjollnir Recipe"),
    ("item_monkey_king_bar", "Monkey King Bar"),
    ("item_recipe_monkey_king_bar", "Monkey King Bar Recipe"),
    ("item_moon_shard", "Moon Shard"),
    ("item_recipe_moon_shard", "Moon Shard Recipe"),
    ("item_necronomicon", "Necronomicon (Level 1)"),
    ("item_necronomicon_2", "Necronomicon (Level 2)"),
    ("item_necronomicon_3", "Necronomicon (Level 3)"),
    ("item_recipe_necronomicon", "Necronomicon Recipe"),
    ("item_null_talisman", "Null Talisman"),
    ("item_recipe_null_talisman", "Null Talisman Recipe"),
    ("item_oblivion_staff", "Oblivion Staff"),
    ("item_recipe_oblivion_staff", "Oblivion Staff Recipe"),
    ("item_ward_dispenser", "Observer and Sentry Wards"),
    ("item_recipe_ward_dispenser", "Observer and Sentry Wards Recipe"),
    ("item_octarine_core", "Octarine Core"),
    ("item_recipe_octarine_core", "Octarine Core Recipe"),
    ("item_orchid", "Orchid Malevolance"),
    ("item_recipe_orchid", "Orchid Malevolance Recipe"),
    ("item_pers", "Perseverance"),
    ("item_recipe_pers", "Perseverance Recipe"),
    ("item_phase_boots", "Phase Boots"),
    ("item_pipe", "Pipe of Insight"),
    ("item_recipe_pipe", "Pipe of Insight Recipe"),
    ("item_poor_mans_shield", "Poor Man's Shield"),
    ("item_recipe_poor_mans_shield", "Poor Man's Shield Recipe"),
    ("item_power_treads", "Power Treads"),
    ("item_recipe_power_treads", "Power Treads Recipe"),
    ("item_radiance", "Radiance"),
    ("item_recipe_radiance", "Radiance Recipe"),
    ("item_rapier", "Divine Rapier"),
    ("item_recipe_rapier", "Divine Rapier Recipe"),
    ("item_refresher", "Refresher Orb"),
    ("item_recipe_refresher", "Refresher Orb Recipe"),
    ("item_ring_of_aquila", "Ring of Aquila"),
    ("item_recipe_ring_of_aquila", "Ring of Aquila Recipe"),
    ("item_ring_of_basilius", "Ring of Basilius"),
    ("item_recipe_ring_of_basilius", "Ring of Basilius Recipe"),
    ("item_rod_of_atos", "Rod of Atos"),
    ("item_recipe_rod_of_atos", "Rod of Atos Recipe"),
    ("item_sange", "Sange"),
    ("item_recipe_sange", "Sange Recipe"),
    ("item_sange_and_yasha", "Sange and Yasha"),
    ("item_recipe_sange_and_yasha", "Sange and Yasha Recipe"),
    ("item_satanic", "Satanic"),
    ("item_recipe_satanic", "Satanic Recipe"),
    ("item_sheepstick", "Scythe of Vyse"),
    ("item_recipe_sheepstick", "Scythe of Vyse Recipe"),
    ("item_invis_sword", "Shadow Blade"),
    ("item_recipe_invis_sword", "Shadow Blade Recipe"),
    ("item_shivas_guard", "Shiva's Guard"),
    ("item_recipe_shivas_guard", "Shiva's Guard Recipe"),
    ("item_silver_edge", "Silver Edge"),
    ("item_recipe_silver_edge", "Silver Edge Recipe"),
    ("item_basher", "Skull Basher"),
    ("item_recipe_basher", "Skull Basher Recipe"),
    ("item_solar_crest", "Solar Crest"),
    ("item_recipe_solar_crest", "Solar Crest Recipe"),
    ("item_soul_booster", "Soul Booster"),
    ("item_recipe_soul_booster", "Soul Booster Recipe"),
    ("item_soul_ring", "Soul Ring"),
    ("item_recipe_soul_ring", "Soul Ring Recipe"),
    ("item_tranquil_boots", "Tranquil Boots"),
    ("item_recipe_tranquil_boots", "Tranquil Boots Recipe"),
    ("item_urn_of_shadows", "Urn of Shadows"),
    ("item_recipe_urn_of_shadows", "Urn of Shadows Recipe"),
    ("item_vanguard", "Vanguard"),
    ("item_recipe_vanguard", "Vanguard Recipe"),
    ("item_veil_of_discord", "Veil of Discord"),
    ("item_recipe_veil_of_discord", "Veil of Discord Recipe"),
    ("item_vladmir", "Vladmir's Offering"),
    ("item_recipe_vladmir", "Vladmir's Offering Recipe"),
    ("item_wraith_band", "Wraith Band"),
    ("item_recipe_wraith_band", "Wraith Band Recipe"),
    ("item_yasha", "Yasha"),
    ("item_recipe_yasha", "Yasha Recipe"),
];

const HEROES: &[(&str, &str)] = &[
    ("npc_dota_hero_abaddon", "Abaddon"),
    ("npc_dota_hero_alchemist", "Alchemist"),
    ("npc_dota_hero_antimage", "Anti-Mage"),
    ("npc_dota_hero_ancient_apparition", "Ancient Apparition"),
    ("npc_dota_hero_arcwarden", "Arc Warden"),
    ("npc_dota_hero_axe", "Axe"),
    ("npc_dota_hero_bane", "Bane"),
    ("npc_dota_hero_batrider", "Batrider"),
    ("npc_dota_hero_beastmaster", "Beastmaster"),
    ("npc_dota_hero_bloodseeker", "Bloodseeker"),
    ("npc_dota_hero_bounty_hunter", "Bounty Hunter"),
    ("npc_dota_hero_brewmaster", "Brewmaster"),
    ("npc_dota_hero_bristleback", "Bristleback"),
    ("npc_dota_hero_broodmother", "Broodmother"),
    ("npc_dota_hero_centaur", "Centaur Warrunner"),
    ("npc_dota_hero_chaos_knight", "Chaos Knight"),
    ("npc_dota_hero_chen", "Chen"),
    ("npc_dota_hero_clinkz", "Clinkz"),
    ("npc_dota_hero_rattletrap", "Clockwerk"),
    ("npc_dota_hero_crystal_maiden", "Crystal Maiden"),
    ("npc_dota_hero_dark_seer", "Dark Seer"),
    ("npc_dota_hero_dazzle", "Dazzle"),
    ("npc_dota_hero_death_prophet", "Death Prophet"),
    ("npc_dota_hero_disruptor", "Disruptor"),
    ("npc_dota_hero_doom_bringer", "Doom"),
    ("npc_dota_hero_dragon_knight", "Dragon Knight"),
    ("npc_dota_hero_drow_ranger", "Drow Ranger"),
    ("npc_dota_hero_earth_spirit", "Earth Spirit"),
    ("npc_dota_hero_earthshaker", "Earthshaker"),
    ("npc_dota_hero_elder_titan", "Elder Titan"),
    ("npc_dota_hero_ember_spirit", "Ember Spirit"),
    ("npc_dota_hero_enchantress", "Enchantress"),
    ("npc_dota_hero_enigma", "Enigma"),
    ("npc_dota_hero_faceless_void", "Faceless Void"),
    ("npc_dota_hero_gyrocopter", "Gyrocopter"),
    ("npc_dota_hero_huskar", "Huskar"),
    ("npc_dota_hero_invoker", "Invoker"),
    ("npc_dota_hero_wisp", "IO"),
    ("npc_dota_hero_jakiro", "Jakiro"),
    ("npc_dota_hero_juggernaut", "Juggernaut"),
    ("npc_dota_hero_keeper_of_the_light", "Keeper of the Light"),
    ("npc_dota_hero_kunkka", "Kunkka"),
    ("npc_dota_hero_legion_commander", "Legion Commander"),
    ("npc_dota_hero_leshrac", "Leshrac"),
    ("npc_dota_hero_lich", "Lich"),
    ("npc_dota_hero_life_stealer", "Life Stealer"),
    ("npc_dota_hero_lina", "Lina"),
    ("npc_dota_hero_lion", "Lion"),
    ("npc_dota_hero_lone_druid", "Lone Druid"),
    ("npc_dota_hero_luna", "Luna"),
    ("npc_dota_hero_lycan", "Lycan"),
    ("npc_dota_hero_magnataur", "Magnus"),
    ("npc_dota_hero_medusa", "Medusa"),
    ("npc_dota_hero_meepo", "Meepo"),
    ("npc_dota_hero_mirana", "Mirana"),
    ("npc_dota_hero_morphling", "Morphling"),
    ("npc_dota_hero_monkey_king", "Monkey King"),
    ("npc_dota_hero_naga_siren", "Naga Siren"),
    ("npc_dota_hero_furion", "Nature's Prophet"),
    ("npc_dota_hero_necrolyte", "Necrophos"),
    ("npc_dota_hero_night_stalker", "Night Stalker"),
    ("npc_dota_hero_nyx_assassin", "Nyx Assassin"),
    ("npc_dota_hero_ogre_magi", "Ogre Magi"),
    ("npc_dota_hero_omniknight", "Omniknight"),
    ("npc_dota_hero_oracle", "Oracle"),
    ("npc_dota_hero_obsidian_destroyer", "Outworld Devourer"),
    ("npc_dota_hero_phantom_assassin", "Phantom Assassin"),
    ("npc_dota_hero_phantom_lancer", "Phantom Lancer"),
    ("npc_dota_hero_phoenix", "Phoenix"),
    ("npc_dota_hero_puck", "Puck"),
    ("npc_dota_hero_pudge", "Pudge"),
    ("npc_dota_hero_pugna", "Pugna"),
    ("npc_dota_hero_queenofpain", "Queen of Pain"),
    ("npc_dota_hero_razor", "Razor"),
    ("npc_dota_hero_riki", "Riki"),
    ("npc_dota_hero_rubick", "Rubick"),
    ("npc_dota_hero_sand_king", "Sand King"),
    ("npc_dota_hero_shadow_demon", "Shadow Demon"),
    ("npc_dota_hero_nevermore", "Shadow Fiend"),
    ("npc_dota_hero_shadow_shaman", "Shadow Shaman"),
    ("npc_dota_hero_silencer", "Silencer"),
    ("npc_dota_hero_skywrath_mage", "Skywrath Mage"),
    ("npc_dota_hero_slardar", "Slardar"),
    ("npc_dota_hero_slark", "Slark"),
    ("npc_dota_hero_sniper", "Sniper"),
    ("npc_dota_hero_spectre", "Spectre"),
    ("npc_dota_hero_spirit_breaker", "Spirit Breaker"),
    ("npc_dota_hero_storm_spirit", "Storm Sprit"),
    ("npc_dota_hero_sven", "Sven"),
    ("npc_dota_hero_techies", "Techies"),
    ("npc_dota_hero_templar_assassin", "Templar Assassin"),
    ("npc_dota_hero_terrorblade", "Terrorblade"),
    ("npc_dota_hero_tidehunter", "Tidehunter"),
    ("npc_dota_hero_shredder", "Timbersaw"),
    ("npc_dota_hero_tinker", "Tinker"),
    ("npc_dota_hero_tiny", "Tiny"),
    ("npc_dota_hero_treant", "Treant Protector"),
    ("npc_dota_hero_troll_warlord", "Troll Warlord"),
    ("npc_dota_hero_tusk", "Tusk"),
    ("npc_dota_hero_abyssal_underlord", "Underlord"),
    ("npc_dota_hero_undying", "Undying"),
    ("npc_dota_hero_ursa", "Ursa"),
    ("npc_dota_hero_vengefulspirit", "Vengeful Spirit"),
    ("npc_dota_hero_venomancer", "Venomancer"),
    ("npc_dota_hero_viper", "Viper"),
    ("npc_dota_hero_visage", "Visage"),
    ("npc_dota_hero_warlock", "Warlock"),
    ("npc_dota_hero_weaver", "Weaver"),
    ("npc_dota_hero_windrunner", "Windranger"),
    ("npc_dota_hero_winter_wyvern", "Winter Wyvern"),
    ("npc_dota_hero_witch_doctor", "Witch Doctor"),
    ("npc_dota_hero_skeleton_king", "Wraith King"),
    ("npc_dota_hero_zuus", "Zeus"),
];

static FRIENDLY_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    BASIC_ITEMS
        .iter()
        .chain(UPGRADED_ITEMS)
        .chain(HEROES)
        .copied()
        .collect()
});

/// Looks up the display name for an internal identifier such as `item_blink`
/// or `npc_dota_hero_sniper`.
pub fn friendly_name(internal_name: &str) -> Option<&'static str> {
    FRIENDLY_NAMES.get(internal_name).copied()
}

/// Like [`friendly_name`], but falls back to the internal name when no display
/// name is known.
pub fn display_name(internal_name: &str) -> &str {
    friendly_name(internal_name).unwrap_or(internal_name)
}
