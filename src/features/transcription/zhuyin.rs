//! Pinyin syllable to zhuyin (bopomofo) conversion.
//!
//! Accepts tone-marked (`lǜ`), tone-numbered (`lv4`, `lu:4`, `lü4`) and
//! toneless syllables. A syllable without any tone is read as neutral tone.

use unidecode::unidecode;

const NEUTRAL_TONE: u8 = 5;

#[rustfmt::skip]
const TONE_MARKS: &[(char, char, u8)] = &[
    ('ā', 'a', 1), ('á', 'a', 2), ('ǎ', 'a', 3), ('à', 'a', 4),
    ('ē', 'e', 1), ('é', 'e', 2), ('ě', 'e', 3), ('è', 'e', 4),
    ('ī', 'i', 1), ('í', 'i', 2), ('ǐ', 'i', 3), ('ì', 'i', 4),
    ('ō', 'o', 1), ('ó', 'o', 2), ('ǒ', 'o', 3), ('ò', 'o', 4),
    ('ū', 'u', 1), ('ú', 'u', 2), ('ǔ', 'u', 3), ('ù', 'u', 4),
    ('ǖ', 'ü', 1), ('ǘ', 'ü', 2), ('ǚ', 'ü', 3), ('ǜ', 'ü', 4),
];

const SIBILANTS: &[&str] = &["zh", "ch", "sh", "r", "z", "c", "s"];

/// Converts one pinyin syllable to bopomofo, or `None` when the syllable
/// is not a standard Mandarin syllable (interjections such as `hm`, `ng`).
pub fn syllable_to_zhuyin(syllable: &str) -> Option<String> {
    let (letters, tone) = split_tone(syllable)?;
    let (initial, rime) = split_initial(&letters);
    let rime = canonical_rime(initial, rime);

    if rime.is_empty() && !SIBILANTS.contains(&initial) {
        return None;
    }

    let mut out = String::new();
    if tone == NEUTRAL_TONE {
        out.push('˙');
    }
    out.push_str(initial_symbol(initial)?);
    out.push_str(rime_symbol(&rime)?);
    match tone {
        2 => out.push('ˊ'),
        3 => out.push('ˇ'),
        4 => out.push('ˋ'),
        _ => {}
    }
    Some(out)
}

/// Lowercases, folds every `ü` spelling to `ü` and pulls out the tone.
fn split_tone(syllable: &str) -> Option<(String, u8)> {
    let lowered = syllable.trim().to_lowercase().replace("u:", "ü");

    // a tone number is only accepted as the last character
    let (body, mut tone) = match lowered.char_indices().last() {
        Some((idx, c)) if c.is_ascii_digit() => {
            let digit = c.to_digit(10)? as u8;
            if !(1..=NEUTRAL_TONE).contains(&digit) {
                return None;
            }
            (&lowered[..idx], Some(digit))
        }
        _ => (lowered.as_str(), None),
    };

    let mut letters = String::with_capacity(body.len());
    for c in body.chars() {
        if let Some(&(_, base, t)) = TONE_MARKS.iter().find(|(marked, _, _)| *marked == c) {
            letters.push(base);
            tone.get_or_insert(t);
            continue;
        }
        match c {
            'ü' | 'v' => letters.push('ü'),
            'ê' => letters.push('ê'),
            'a'..='z' => letters.push(c),
            _ => {
                let folded = unidecode(&c.to_string()).to_lowercase();
                if folded.is_empty() || !folded.chars().all(|f| f.is_ascii_lowercase()) {
                    return None;
                }
                letters.push_str(&folded);
            }
        }
    }

    if letters.is_empty() {
        return None;
    }
    Some((letters, tone.unwrap_or(NEUTRAL_TONE)))
}

/// Splits off the initial and rewrites `y`/`w` spellings to zero-initial rimes.
fn split_initial(letters: &str) -> (&'static str, String) {
    for initial in ["zh", "ch", "sh"] {
        if let Some(rest) = letters.strip_prefix(initial) {
            return (initial, rest.to_string());
        }
    }

    let mut chars = letters.chars();
    let Some(first) = chars.next() else {
        return ("", String::new());
    };
    let rest = chars.as_str();

    match first {
        'y' => {
            let rime = if rest.starts_with('i') {
                rest.to_string()
            } else if let Some(tail) = rest.strip_prefix('u').or_else(|| rest.strip_prefix('ü')) {
                format!("ü{}", tail)
            } else {
                format!("i{}", rest)
            };
            ("", rime)
        }
        'w' => {
            let rime = if rest.starts_with('u') {
                rest.to_string()
            } else {
                format!("u{}", rest)
            };
            ("", rime)
        }
        _ => match single_initial(first) {
            Some(initial) => (initial, rest.to_string()),
            None => ("", letters.to_string()),
        },
    }
}

fn single_initial(c: char) -> Option<&'static str> {
    let initial = match c {
        'b' => "b",
        'p' => "p",
        'm' => "m",
        'f' => "f",
        'd' => "d",
        't' => "t",
        'n' => "n",
        'l' => "l",
        'g' => "g",
        'k' => "k",
        'h' => "h",
        'j' => "j",
        'q' => "q",
        'x' => "x",
        'r' => "r",
        'z' => "z",
        'c' => "c",
        's' => "s",
        _ => return None,
    };
    Some(initial)
}

/// Restores the rime hidden by pinyin spelling rules.
fn canonical_rime(initial: &str, rime: String) -> String {
    let rime = if matches!(initial, "j" | "q" | "x") && rime.starts_with('u') {
        format!("ü{}", &rime[1..])
    } else {
        rime
    };

    if SIBILANTS.contains(&initial) && rime == "i" {
        return String::new();
    }

    match rime.as_str() {
        "iu" => "iou".to_string(),
        "ui" => "uei".to_string(),
        "un" => "uen".to_string(),
        _ => rime,
    }
}

fn initial_symbol(initial: &str) -> Option<&'static str> {
    let symbol = match initial {
        "" => "",
        "b" => "ㄅ",
        "p" => "ㄆ",
        "m" => "ㄇ",
        "f" => "ㄈ",
        "d" => "ㄉ",
        "t" => "ㄊ",
        "n" => "ㄋ",
        "l" => "ㄌ",
        "g" => "ㄍ",
        "k" => "ㄎ",
        "h" => "ㄏ",
        "j" => "ㄐ",
        "q" => "ㄑ",
        "x" => "ㄒ",
        "zh" => "ㄓ",
        "ch" => "ㄔ",
        "sh" => "ㄕ",
        "r" => "ㄖ",
        "z" => "ㄗ",
        "c" => "ㄘ",
        "s" => "ㄙ",
        _ => return None,
    };
    Some(symbol)
}

fn rime_symbol(rime: &str) -> Option<&'static str> {
    let symbol = match rime {
        "" => "",
        "a" => "ㄚ",
        "o" => "ㄛ",
        "e" => "ㄜ",
        "ê" => "ㄝ",
        "ai" => "ㄞ",
        "ei" => "ㄟ",
        "ao" => "ㄠ",
        "ou" => "ㄡ",
        "an" => "ㄢ",
        "en" => "ㄣ",
        "ang" => "ㄤ",
        "eng" => "ㄥ",
        "er" => "ㄦ",
        "ong" => "ㄨㄥ",
        "i" => "ㄧ",
        "ia" => "ㄧㄚ",
        "io" => "ㄧㄛ",
        "ie" => "ㄧㄝ",
        "iai" => "ㄧㄞ",
        "iao" => "ㄧㄠ",
        "iou" => "ㄧㄡ",
        "ian" => "ㄧㄢ",
        "in" => "ㄧㄣ",
        "iang" => "ㄧㄤ",
        "ing" => "ㄧㄥ",
        "iong" => "ㄩㄥ",
        "u" => "ㄨ",
        "ua" => "ㄨㄚ",
        "uo" => "ㄨㄛ",
        "uai" => "ㄨㄞ",
        "uei" => "ㄨㄟ",
        "uan" => "ㄨㄢ",
        "uen" => "ㄨㄣ",
        "uang" => "ㄨㄤ",
        "ueng" => "ㄨㄥ",
        "ü" => "ㄩ",
        "üe" => "ㄩㄝ",
        "üan" => "ㄩㄢ",
        "ün" => "ㄩㄣ",
        _ => return None,
    };
    Some(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zy(syllable: &str) -> String {
        syllable_to_zhuyin(syllable).unwrap_or_else(|| panic!("no zhuyin for {syllable}"))
    }

    #[test]
    fn converts_tone_marked_syllables() {
        assert_eq!(zy("nǐ"), "ㄋㄧˇ");
        assert_eq!(zy("hǎo"), "ㄏㄠˇ");
        assert_eq!(zy("zhōng"), "ㄓㄨㄥ");
        assert_eq!(zy("guó"), "ㄍㄨㄛˊ");
        assert_eq!(zy("fēng"), "ㄈㄥ");
        assert_eq!(zy("shùn"), "ㄕㄨㄣˋ");
    }

    #[test]
    fn marks_neutral_tone_as_prefix() {
        assert_eq!(zy("de"), "˙ㄉㄜ");
        assert_eq!(zy("ma5"), "˙ㄇㄚ");
    }

    #[test]
    fn handles_every_umlaut_spelling() {
        assert_eq!(zy("lǜ"), "ㄌㄩˋ");
        assert_eq!(zy("lv4"), "ㄌㄩˋ");
        assert_eq!(zy("lu:4"), "ㄌㄩˋ");
        assert_eq!(zy("lü4"), "ㄌㄩˋ");
        assert_eq!(zy("xué"), "ㄒㄩㄝˊ");
        assert_eq!(zy("jūn"), "ㄐㄩㄣ");
        assert_eq!(zy("qù"), "ㄑㄩˋ");
    }

    #[test]
    fn rewrites_y_and_w_spellings() {
        assert_eq!(zy("yī"), "ㄧ");
        assert_eq!(zy("yǒu"), "ㄧㄡˇ");
        assert_eq!(zy("yuán"), "ㄩㄢˊ");
        assert_eq!(zy("yòng"), "ㄩㄥˋ");
        assert_eq!(zy("yīng"), "ㄧㄥ");
        assert_eq!(zy("wǔ"), "ㄨˇ");
        assert_eq!(zy("wèi"), "ㄨㄟˋ");
        assert_eq!(zy("wēng"), "ㄨㄥ");
    }

    #[test]
    fn expands_contracted_rimes() {
        assert_eq!(zy("liù"), "ㄌㄧㄡˋ");
        assert_eq!(zy("guǐ"), "ㄍㄨㄟˇ");
        assert_eq!(zy("lún"), "ㄌㄨㄣˊ");
    }

    #[test]
    fn sibilants_drop_the_empty_rime() {
        assert_eq!(zy("shì"), "ㄕˋ");
        assert_eq!(zy("zhi1"), "ㄓ");
        assert_eq!(zy("rì"), "ㄖˋ");
        assert_eq!(zy("sī"), "ㄙ");
    }

    #[test]
    fn zero_initial_syllables() {
        assert_eq!(zy("ér"), "ㄦˊ");
        assert_eq!(zy("ài"), "ㄞˋ");
        assert_eq!(zy("ōu"), "ㄡ");
    }

    #[test]
    fn rejects_non_standard_syllables() {
        assert_eq!(syllable_to_zhuyin("hm"), None);
        assert_eq!(syllable_to_zhuyin("ng"), None);
        assert_eq!(syllable_to_zhuyin("AA"), None);
        assert_eq!(syllable_to_zhuyin(""), None);
        assert_eq!(syllable_to_zhuyin("ma7"), None);
    }
}
