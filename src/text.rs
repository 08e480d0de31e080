use crate::SeqRes;
use crate::err::SeqErr;
use crate::seq::Seq;
use regex::{Regex, RegexBuilder};

/// Regex split/replace sugar over plain `str`.
///
/// Flags are single-letter codes combined in one string: `i` case-insensitive,
/// `m` multiline, `s` or `.` dot-matches-newline, `x` or `v` verbose, `u`
/// unicode (already the default). Unknown letters are rejected.
pub trait StrExt {
    /// Split by `patterns[0]` honoring `maxsplit` (0 = unlimited), then
    /// re-split every fragment by the remaining patterns in order, without a
    /// split limit. The fragments come back wrapped in a [`Seq`].
    fn split_all(&self, patterns: &[&str], maxsplit: usize, flags: &str) -> SeqRes<Seq<String>>;

    /// Apply pattern/substitution pairs left to right, each pass over the
    /// output of the previous one. A single substitution broadcasts to all
    /// patterns; otherwise the counts must match exactly. `maxreplace` caps
    /// the replacements per pattern (0 = all occurrences).
    fn replace_all(&self, patterns: &[&str], substitutions: &[&str], maxreplace: usize, flags: &str)
    -> SeqRes<String>;
}

impl StrExt for str {
    fn split_all(&self, patterns: &[&str], maxsplit: usize, flags: &str) -> SeqRes<Seq<String>> {
        let mut regexes = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            regexes.push(compile(pattern, flags)?);
        }
        let mut fragments = Vec::new();
        split_into(self, &regexes, maxsplit, &mut fragments);
        Ok(Seq::new(fragments))
    }

    fn replace_all(
        &self,
        patterns: &[&str],
        substitutions: &[&str],
        maxreplace: usize,
        flags: &str,
    ) -> SeqRes<String> {
        let substitutions: Vec<&str> = if substitutions.len() == 1 {
            vec![substitutions[0]; patterns.len()]
        } else if substitutions.len() != patterns.len() {
            return Err(SeqErr::SubstitutionMismatch {
                patterns: patterns.len(),
                substitutions: substitutions.len(),
            });
        } else {
            substitutions.to_vec()
        };
        let mut result = self.to_owned();
        for (pattern, substitution) in patterns.iter().zip(substitutions) {
            let regex = compile(pattern, flags)?;
            result = if maxreplace > 0 {
                regex.replacen(&result, maxreplace, substitution).into_owned()
            } else {
                regex.replace_all(&result, substitution).into_owned()
            };
        }
        Ok(result)
    }
}

fn compile(pattern: &str, flags: &str) -> SeqRes<Regex> {
    let mut builder = RegexBuilder::new(pattern);
    for flag in flags.chars() {
        match flag {
            'i' => builder.case_insensitive(true),
            'm' => builder.multi_line(true),
            's' | '.' => builder.dot_matches_new_line(true),
            'x' | 'v' => builder.ignore_whitespace(true),
            'u' => builder.unicode(true),
            _ => return Err(SeqErr::UnknownFlag { flag }),
        };
    }
    builder
        .build()
        .map_err(|err| SeqErr::BadPattern { pattern: pattern.to_owned(), err: err.to_string() })
}

fn split_into(text: &str, regexes: &[Regex], maxsplit: usize, out: &mut Vec<String>) {
    let Some((first, rest)) = regexes.split_first() else {
        out.push(text.to_owned());
        return;
    };
    let chunks: Vec<&str> = if maxsplit > 0 {
        // the limit counts fragments, maxsplit counts cuts
        first.splitn(text, maxsplit + 1).collect()
    } else {
        first.split(text).collect()
    };
    for chunk in chunks {
        split_into(chunk, rest, 0, out);
    }
}
