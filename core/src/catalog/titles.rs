//! Canonical EON-produced 007 film titles, Dr. No (1962) through
//! No Time to Die (2021). Non-EON productions (the 1967 Casino Royale,
//! Never Say Never Again) are deliberately absent.

use phf::phf_set;

pub static CANONICAL_TITLES: phf::Set<&'static str> = phf_set! {
    "Dr. No",
    "From Russia with Love",
    "Goldfinger",
    "Thunderball",
    "You Only Live Twice",
    "On Her Majesty's Secret Service",
    "Diamonds Are Forever",
    "Live and Let Die",
    "The Man with the Golden Gun",
    "The Spy Who Loved Me",
    "Moonraker",
    "For Your Eyes Only",
    "Octopussy",
    "A View to a Kill",
    "The Living Daylights",
    "Licence to Kill",
    "GoldenEye",
    "Tomorrow Never Dies",
    "The World Is Not Enough",
    "Die Another Day",
    "Casino Royale",
    "Quantum of Solace",
    "Skyfall",
    "Spectre",
    "No Time to Die",
};

pub fn is_canonical_title(title: &str) -> bool {
    CANONICAL_TITLES.contains(title)
}
