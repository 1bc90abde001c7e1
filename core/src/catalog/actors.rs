//! The six official EON-era franchise lead actors.

use phf::phf_set;

pub static EON_ACTORS: phf::Set<&'static str> = phf_set! {
    "Sean Connery",
    "George Lazenby",
    "Roger Moore",
    "Timothy Dalton",
    "Pierce Brosnan",
    "Daniel Craig",
};

pub fn is_eon_actor(name: &str) -> bool {
    EON_ACTORS.contains(name)
}
