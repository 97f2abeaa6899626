use crate::game::dice::Dice;
use crate::game::tables::SYLLABLES;
use std::ops::RangeInclusive;

pub const SYLLABLE_COUNT: RangeInclusive<u32> = 2..=4;

/// Glues 2-4 random syllables together and title-cases the result.
pub fn generate_planet_name<D: Dice + ?Sized>(dice: &mut D) -> String {
    let count = dice.roll(SYLLABLE_COUNT);
    let raw: String = (0..count).map(|_| dice.pick(SYLLABLES)).collect();
    title_case(&raw)
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest.
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_word_start = true;
    for ch in raw.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
