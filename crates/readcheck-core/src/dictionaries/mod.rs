//! Static data tables.
//!
//! Built-in phrase sets and the syllable dictionary used for speech-rate
//! estimates. All tables are immutable after first use.

pub mod phrase_sets;
pub mod syllable_dict;
