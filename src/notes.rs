//! Note names for scale steps.

use crate::equal::steps_as_cents;
use crate::helpers::approx_eq;
use crate::scale::AnnotatedScale;

const KEYBOARD_NOTES: [&str; 12] = [
    "C", "C#", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B",
];

const NATURALS: [&str; 8] = ["C", "D", "E", "F", "G", "A", "B", "C"];

/// Whether each step of the natural scale, starting on C, is a whole tone.
const IS_TONE: [bool; 7] = [true, true, false, true, true, true, false];

/// The key a step falls on when the scale is mapped onto a 12-key keyboard, one key per step.
///
/// ```
/// use temperaments::notes::keyboard_key;
///
/// assert_eq!(keyboard_key(0), "C1");
/// assert_eq!(keyboard_key(10), "Bb1");
/// assert_eq!(keyboard_key(19), "G2");
/// ```
pub fn keyboard_key(index: usize) -> String {
    format!("{}{}", KEYBOARD_NOTES[index % 12], index / 12 + 1)
}

/// Sharp/flat spellings of every step of an equal division with at least 12 steps.
///
/// The whole tone is the index of the step holding 9:8, and the diatonic
/// semitone is whatever remains of the octave after five whole tones, split in
/// two. Each natural is followed by its sharps, then an enharmonic pair when the
/// step count between two naturals leaves one in the middle, then the flats of
/// the next natural.
///
/// Returns `None` if the scale is too small or not equally divided, has no 9:8,
/// or the spelling does not cover it exactly.
pub fn edo_note_names(scale: &AnnotatedScale) -> Option<Vec<String>> {
    let nb_steps = scale.nb_steps();
    if nb_steps < 12 || !is_equal_division(scale) {
        return None;
    }
    let tone = scale.step_with_label("M2")?.step.index as i64;
    let semitone = (nb_steps as i64 - tone * 5) / 2;

    let mut names = Vec::with_capacity(nb_steps + 1);
    for (degree, &is_tone) in IS_TONE.iter().enumerate() {
        let (natural, next) = (NATURALS[degree], NATURALS[degree + 1]);
        let size = if is_tone { tone } else { semitone };
        let accidentals = (size - 1) / 2;
        let needs_pair = (size - 1) % 2 == 1;

        for sharps in 0..=accidentals {
            names.push(format!("{natural}{}", "#".repeat(sharps as usize)));
        }
        if needs_pair {
            let n = accidentals as usize + 1;
            names.push(format!("{natural}{}/{next}{}", "#".repeat(n), "b".repeat(n)));
        }
        for flats in (1..=accidentals).rev() {
            names.push(format!("{next}{}", "b".repeat(flats as usize)));
        }
    }
    names.push("C".to_string());

    if names.len() == nb_steps + 1 {
        Some(names)
    } else {
        log::debug!(
            "note spelling covers {} steps, scale has {}",
            names.len(),
            nb_steps + 1
        );
        None
    }
}

fn is_equal_division(scale: &AnnotatedScale) -> bool {
    let divisions = scale.nb_steps() as u32;
    scale
        .steps()
        .iter()
        .all(|s| approx_eq(s.step.cents, steps_as_cents(s.step.index as u32, divisions), 1e-6))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::ReferenceCatalogue;
    use crate::equal::EqualDivision;
    use crate::placement::PlacementEngine;

    fn names_for(divisions: u32) -> Option<Vec<String>> {
        let catalogue = ReferenceCatalogue::default();
        let scale = EqualDivision::new(divisions, 261.625).generate().unwrap();
        edo_note_names(&PlacementEngine::new(&catalogue).place(&scale))
    }

    #[test]
    fn test_12_edo() {
        assert_eq!(
            names_for(12).unwrap(),
            vec![
                "C", "C#/Db", "D", "D#/Eb", "E", "F", "F#/Gb", "G", "G#/Ab", "A", "A#/Bb", "B",
                "C"
            ]
        );
    }

    #[test]
    fn test_19_edo() {
        assert_eq!(
            names_for(19).unwrap(),
            vec![
                "C", "C#", "Db", "D", "D#", "Eb", "E", "E#/Fb", "F", "F#", "Gb", "G", "G#", "Ab",
                "A", "A#", "Bb", "B", "B#/Cb", "C"
            ]
        );
    }

    #[test]
    fn test_31_edo() {
        let names = names_for(31).unwrap();
        assert_eq!(names.len(), 32);
        assert_eq!(names[..6], ["C", "C#", "C##", "Dbb", "Db", "D"]);
        assert_eq!(names[10..14], ["E", "E#", "Fb", "F"]);
    }

    #[test]
    fn test_53_edo() {
        let names = names_for(53).unwrap();
        assert_eq!(names.len(), 54);
        assert_eq!(names[18..23], ["E", "E#", "E##/Fbb", "Fb", "F"]);
    }

    #[test]
    fn test_too_small_or_unspellable() {
        assert_eq!(names_for(7), None);
        // 13-EDO puts 9:8 on step 2, which leaves no room for the semitones.
        assert_eq!(names_for(13), None);
    }

    #[test]
    fn test_unequal_scale() {
        // 43 steps with 9:8 on step 8 would fit the walk, but Partch is not an EDO.
        assert_eq!(edo_note_names(&crate::partch::partch_annotated()), None);
    }
}
