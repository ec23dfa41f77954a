//! # Pattern Tables and Conversion
//!
//! CLDR-derived date and time patterns per locale, plus the conversions the
//! rest of the crate needs: CLDR tokens to chrono format specifiers, the
//! short-year ("yy") to long-year ("Y") rewrite, and the mapping from a
//! locale tag to chrono's localized-name data.
//!
//! Tags are matched leniently: `en-US`, `en_US`, and bare `en` all resolve
//! to the same table. Unknown tags fall back to the `en-US` table, which is
//! also what an absent locale resolves to.

use std::sync::LazyLock;

use chrono::Locale;
use fancy_regex::Regex;

use crate::format::FormatStyle;

/// Four date patterns and four time patterns, indexed by
/// [`FormatStyle::index`] (Full, Long, Medium, Short).
struct StylePatterns {
    date: [&'static str; 4],
    time: [&'static str; 4],
}

static EN_US: StylePatterns = StylePatterns {
    date: ["EEEE, MMMM d, y", "MMMM d, y", "MMM d, y", "M/d/yy"],
    time: ["h:mm:ss a zzzz", "h:mm:ss a z", "h:mm:ss a", "h:mm a"],
};

static EN_GB: StylePatterns = StylePatterns {
    date: ["EEEE d MMMM y", "d MMMM y", "d MMM y", "dd/MM/y"],
    time: ["HH:mm:ss zzzz", "HH:mm:ss z", "HH:mm:ss", "HH:mm"],
};

static DE: StylePatterns = StylePatterns {
    date: ["EEEE, d. MMMM y", "d. MMMM y", "dd.MM.y", "dd.MM.yy"],
    time: ["HH:mm:ss zzzz", "HH:mm:ss z", "HH:mm:ss", "HH:mm"],
};

static FR: StylePatterns = StylePatterns {
    date: ["EEEE d MMMM y", "d MMMM y", "d MMM y", "dd/MM/y"],
    time: ["HH:mm:ss zzzz", "HH:mm:ss z", "HH:mm:ss", "HH:mm"],
};

static ES: StylePatterns = StylePatterns {
    date: [
        "EEEE, d 'de' MMMM 'de' y",
        "d 'de' MMMM 'de' y",
        "d MMM y",
        "d/M/yy",
    ],
    time: ["H:mm:ss zzzz", "H:mm:ss z", "H:mm:ss", "H:mm"],
};

static JA: StylePatterns = StylePatterns {
    date: ["y年M月d日EEEE", "y年M月d日", "y/MM/dd", "y/MM/dd"],
    time: ["H時mm分ss秒 zzzz", "H:mm:ss z", "H:mm:ss", "H:mm"],
};

static PT_BR: StylePatterns = StylePatterns {
    date: [
        "EEEE, d 'de' MMMM 'de' y",
        "d 'de' MMMM 'de' y",
        "d 'de' MMM 'de' y",
        "dd/MM/y",
    ],
    time: ["HH:mm:ss zzzz", "HH:mm:ss z", "HH:mm:ss", "HH:mm"],
};

fn table(tag: Option<&str>) -> &'static StylePatterns {
    let normalized = tag
        .unwrap_or("en-US")
        .trim()
        .replace('-', "_")
        .to_ascii_lowercase();
    match normalized.as_str() {
        "en_gb" | "en_au" | "en_nz" | "en_ie" => &EN_GB,
        "de" | "de_de" | "de_at" | "de_ch" => &DE,
        "fr" | "fr_fr" | "fr_be" => &FR,
        "es" | "es_es" | "es_mx" | "es_ar" => &ES,
        "ja" | "ja_jp" => &JA,
        "pt" | "pt_br" | "pt_pt" => &PT_BR,
        _ => &EN_US,
    }
}

/// Derives the date pattern for the locale and style. No timezone applies;
/// this is pure pattern selection.
pub fn date_pattern(locale: Option<&str>, style: FormatStyle) -> String {
    table(locale).date[style.index()].to_string()
}

/// Derives the time pattern for the locale and style.
pub fn time_pattern(locale: Option<&str>, style: FormatStyle) -> String {
    table(locale).time[style.index()].to_string()
}

static SHORT_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("(?<!y)yy(?!y)").expect("short-year rewrite pattern is valid")
});

/// Rewrites an exactly-two-character year run (`yy`) to the four-digit `Y`
/// token. Runs of one, three, or more `y` characters are left alone, so
/// applying this to a pattern without a short year is a no-op.
pub fn long_year(pattern: &str) -> String {
    SHORT_YEAR.replace_all(pattern, "Y").into_owned()
}

/// Converts a CLDR-style pattern into a chrono format string.
///
/// Quoted runs are literal (`''` is an escaped apostrophe). Field letters
/// this crate's tables never produce are dropped. Non-ASCII literal
/// characters (e.g. the CJK date markers) pass through unchanged.
pub fn to_strftime(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '\'' {
            if chars.get(i + 1) == Some(&'\'') {
                out.push('\'');
                i += 2;
                continue;
            }
            i += 1;
            while i < chars.len() && chars[i] != '\'' {
                push_literal(&mut out, chars[i]);
                i += 1;
            }
            i += 1;
            continue;
        }
        if c.is_ascii_alphabetic() {
            let mut run = 1;
            while i + run < chars.len() && chars[i + run] == c {
                run += 1;
            }
            push_field(&mut out, c, run);
            i += run;
            continue;
        }
        push_literal(&mut out, c);
        i += 1;
    }

    out
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

fn push_field(out: &mut String, letter: char, run: usize) {
    let spec = match (letter, run) {
        ('y', 2) => "%y",
        ('y', _) | ('Y', _) | ('u', _) => "%Y",
        ('M', 1) | ('L', 1) => "%-m",
        ('M', 2) | ('L', 2) => "%m",
        ('M', 3) | ('L', 3) => "%b",
        ('M', _) | ('L', _) => "%B",
        ('d', 1) => "%-d",
        ('d', _) => "%d",
        ('E', 4) | ('c', 4) => "%A",
        ('E', _) | ('c', _) => "%a",
        ('H', 1) => "%-H",
        ('H', _) => "%H",
        ('h', 1) => "%-I",
        ('h', _) => "%I",
        ('m', 1) => "%-M",
        ('m', _) => "%M",
        ('s', 1) => "%-S",
        ('s', _) => "%S",
        ('a', _) => "%p",
        ('z', _) | ('v', _) | ('V', _) => "%Z",
        _ => "",
    };
    out.push_str(spec);
}

/// Maps a locale tag to chrono's localized-name data, defaulting region-less
/// tags to their most common region and anything unknown to `en_US`.
pub(crate) fn chrono_locale(tag: Option<&str>) -> Locale {
    let Some(tag) = tag else {
        return Locale::en_US;
    };
    let normalized = tag.trim().replace('-', "_");
    if let Ok(locale) = Locale::try_from(normalized.as_str()) {
        return locale;
    }
    match normalized
        .split('_')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
        .as_str()
    {
        "en" => Locale::en_US,
        "de" => Locale::de_DE,
        "fr" => Locale::fr_FR,
        "es" => Locale::es_ES,
        "ja" => Locale::ja_JP,
        "pt" => Locale::pt_BR,
        _ => Locale::en_US,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_date_patterns_vary_by_locale() {
        assert_eq!(date_pattern(Some("en-US"), FormatStyle::Short), "M/d/yy");
        assert_eq!(date_pattern(Some("en_US"), FormatStyle::Short), "M/d/yy");
        assert_eq!(date_pattern(Some("de-DE"), FormatStyle::Short), "dd.MM.yy");
        assert_eq!(date_pattern(Some("ja"), FormatStyle::Short), "y/MM/dd");
    }

    #[test]
    fn absent_or_unknown_locale_falls_back_to_en_us() {
        assert_eq!(date_pattern(None, FormatStyle::Short), "M/d/yy");
        assert_eq!(date_pattern(Some("tlh-QO"), FormatStyle::Short), "M/d/yy");
    }

    #[test]
    fn time_patterns_follow_style() {
        assert_eq!(time_pattern(Some("en-US"), FormatStyle::Short), "h:mm a");
        assert_eq!(
            time_pattern(Some("en-US"), FormatStyle::Medium),
            "h:mm:ss a"
        );
        assert_eq!(time_pattern(Some("de"), FormatStyle::Short), "HH:mm");
    }

    #[test]
    fn long_year_rewrites_exact_double_y_runs() {
        assert_eq!(long_year("M/d/yy"), "M/d/Y");
        assert_eq!(long_year("dd.MM.yy"), "dd.MM.Y");
    }

    #[test]
    fn long_year_leaves_other_year_runs_alone() {
        assert_eq!(long_year("y/MM/dd"), "y/MM/dd");
        assert_eq!(long_year("yyyy-MM-dd"), "yyyy-MM-dd");
        assert_eq!(long_year("d MMM y"), "d MMM y");
    }

    #[test]
    fn strftime_conversion_covers_numeric_patterns() {
        assert_eq!(to_strftime("M/d/yy"), "%-m/%-d/%y");
        assert_eq!(to_strftime("dd.MM.y"), "%d.%m.%Y");
        assert_eq!(to_strftime("h:mm a"), "%-I:%M %p");
        assert_eq!(to_strftime("HH:mm:ss"), "%H:%M:%S");
    }

    #[test]
    fn strftime_conversion_covers_names_and_literals() {
        assert_eq!(to_strftime("EEEE, MMMM d, y"), "%A, %B %-d, %Y");
        assert_eq!(to_strftime("d 'de' MMMM 'de' y"), "%-d de %B de %Y");
        assert_eq!(to_strftime("y年M月d日"), "%Y年%-m月%-d日");
        assert_eq!(to_strftime("h:mm:ss a z"), "%-I:%M:%S %p %Z");
    }

    #[test]
    fn chrono_locale_resolves_tags_and_defaults() {
        assert_eq!(chrono_locale(Some("en-US")), Locale::en_US);
        assert_eq!(chrono_locale(Some("de")), Locale::de_DE);
        assert_eq!(chrono_locale(Some("xx-YY")), Locale::en_US);
        assert_eq!(chrono_locale(None), Locale::en_US);
    }
}
