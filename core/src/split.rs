// core/src/split.rs
//
// Groups the flat segmenter output into words using the boundary flags.

/// Nest `tokens` and `light_tone` into words, closing a word after every
/// token whose boundary flag is set. A trailing unflagged run is still
/// closed as the last word.
///
/// Generic over the token type so a second track can be re-split with
/// another track's flags.
pub fn split_words<T: Clone>(
    tokens: &[T],
    light_tone: &[bool],
    boundary: &[bool],
) -> (Vec<Vec<T>>, Vec<Vec<bool>>) {
    let mut words = Vec::new();
    let mut word_light = Vec::new();
    let mut pos = 0;
    while pos < tokens.len() {
        let mut end = pos;
        while end < boundary.len() && !boundary[end] {
            end += 1;
        }
        let end = (end + 1).min(tokens.len());
        words.push(tokens[pos..end].to_vec());
        word_light.push(light_tone[pos..end.min(light_tone.len())].to_vec());
        pos = end;
    }
    (words, word_light)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closes_words_at_flags() {
        let tokens = ["Guá", "tsiah", "pá", "bē"];
        let light = [false, false, false, true];
        let boundary = [true, false, false, false];
        let (words, lights) = split_words(&tokens, &light, &boundary);
        assert_eq!(words, vec![vec!["Guá"], vec!["tsiah", "pá", "bē"]]);
        assert_eq!(lights, vec![vec![false], vec![false, false, true]]);
    }

    #[test]
    fn every_token_flagged() {
        let tokens = [1, 2, 3];
        let (words, _) = split_words(&tokens, &[false; 3], &[true; 3]);
        assert_eq!(words, vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn empty_input() {
        let (words, lights) = split_words::<String>(&[], &[], &[]);
        assert!(words.is_empty());
        assert!(lights.is_empty());
    }

    #[test]
    fn foreign_track_reuses_flags() {
        let hanlo = ["我", "食", "飯"];
        let light = [false, false, false];
        let boundary = [true, false, false];
        let (words, _) = split_words(&hanlo, &light, &boundary);
        assert_eq!(words, vec![vec!["我"], vec!["食", "飯"]]);
    }
}
