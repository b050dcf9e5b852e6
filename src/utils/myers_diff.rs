//! Adapted from <https://github.com/mitsuhiko/similar/blob/7e15c44de11a1cd61e1149189929e189ef977fd8/src/algorithms/myers.rs>
//!
//! Myers' diff algorithm, reporting only the blocks both sequences share.
//!
//! * time: `O((N+M)D)`
//! * space `O(N+M)`
//!
//! See [the original article by Eugene W. Myers](http://www.xmailserver.org/diff2.pdf)
//! describing it.

use std::ops::{Index, IndexMut, Range};

use crate::{
    types::text_match::Match,
    utils::common_prefix_len::{common_prefix_len, common_suffix_len},
};

/// Longest common subsequence of `source` and `target` as ascending,
/// non-overlapping blocks. Blocks adjacent in both sequences are joined,
/// so consecutive blocks always have something between them on at least
/// one side.
pub fn myers_matching_blocks<T>(source: &[T], target: &[T]) -> Vec<Match>
where
    T: PartialEq,
{
    let max_d = max_d(source.len(), target.len());
    let mut vf = V::new(max_d);
    let mut vb = V::new(max_d);
    let mut blocks = Vec::new();

    conquer(
        source,
        0..source.len(),
        target,
        0..target.len(),
        &mut vf,
        &mut vb,
        &mut blocks,
    );

    blocks
}

fn max_d(len1: usize, len2: usize) -> usize { (len1 + len2).div_ceil(2) + 1 }

fn push_block(blocks: &mut Vec<Match>, source: usize, target: usize, length: usize) {
    if length == 0 {
        return;
    }

    match blocks.last_mut() {
        Some(last) if last.source_end() == source && last.target_end() == target => {
            last.length += length;
        }
        _ => blocks.push(Match::new(source, target, length)),
    }
}

/// Endpoints of the furthest reaching D-paths, indexed by diagonal `k`,
/// which may be negative.
#[derive(Debug)]
struct V {
    offset: isize,
    v: Vec<usize>,
}

impl V {
    fn new(max_d: usize) -> Self {
        Self {
            offset: isize::try_from(max_d).unwrap_or(isize::MAX),
            v: vec![0; 2 * max_d],
        }
    }

    fn slot(&self, k: isize) -> usize {
        usize::try_from(k + self.offset)
            .unwrap_or(0)
            .min(self.v.len().saturating_sub(1))
    }
}

impl Index<isize> for V {
    type Output = usize;

    fn index(&self, k: isize) -> &Self::Output { &self.v[self.slot(k)] }
}

impl IndexMut<isize> for V {
    fn index_mut(&mut self, k: isize) -> &mut Self::Output {
        let slot = self.slot(k);
        &mut self.v[slot]
    }
}

fn to_isize(value: usize) -> isize { isize::try_from(value).unwrap_or(isize::MAX) }

fn to_usize(value: isize) -> usize { usize::try_from(value).unwrap_or(0) }

/// Find the middle snake of an optimal D-path by running the search from
/// both corners of the edit graph until the two frontiers overlap. Returns
/// the point where the graph can be split into two smaller problems.
fn find_middle_snake<T>(
    source: &[T],
    source_range: Range<usize>,
    target: &[T],
    target_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
) -> Option<(usize, usize)>
where
    T: PartialEq,
{
    let n = source_range.len();
    let m = target_range.len();

    // The optimal edit script length is odd or even as `delta` is.
    let delta = to_isize(n) - to_isize(m);
    let odd = delta & 1 == 1;

    vf[1] = 0;
    vb[1] = 0;

    for d in 0..to_isize(max_d(n, m)) {
        // Forward path
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vf[k - 1] < vf[k + 1]) {
                vf[k + 1]
            } else {
                vf[k - 1] + 1
            };
            let y = to_usize(to_isize(x) - k);
            let (x0, y0) = (x, y);

            if x < n && y < m {
                x += common_prefix_len(
                    source,
                    source_range.start + x..source_range.end,
                    target,
                    target_range.start + y..target_range.end,
                );
            }
            vf[k] = x;

            if odd && (k - delta).abs() <= d - 1 && vf[k] + vb[-(k - delta)] >= n {
                return Some((x0 + source_range.start, y0 + target_range.start));
            }
        }

        // Backward path
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vb[k - 1] < vb[k + 1]) {
                vb[k + 1]
            } else {
                vb[k - 1] + 1
            };
            let mut y = to_usize(to_isize(x) - k);

            if x < n && y < m {
                let advance = common_suffix_len(
                    source,
                    source_range.start..source_range.start + n - x,
                    target,
                    target_range.start..target_range.start + m - y,
                );
                x += advance;
                y += advance;
            }
            vb[k] = x;

            if !odd && (k - delta).abs() <= d && vb[k] + vf[-(k - delta)] >= n {
                return Some((n - x + source_range.start, m - y + target_range.start));
            }
        }
    }

    None
}

fn conquer<T>(
    source: &[T],
    mut source_range: Range<usize>,
    target: &[T],
    mut target_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
    blocks: &mut Vec<Match>,
) where
    T: PartialEq,
{
    let prefix = common_prefix_len(source, source_range.clone(), target, target_range.clone());
    push_block(blocks, source_range.start, target_range.start, prefix);
    source_range.start += prefix;
    target_range.start += prefix;

    let suffix = common_suffix_len(source, source_range.clone(), target, target_range.clone());
    source_range.end -= suffix;
    target_range.end -= suffix;
    let suffix_start = (source_range.end, target_range.end);

    if !source_range.is_empty() && !target_range.is_empty() {
        let middle = find_middle_snake(
            source,
            source_range.clone(),
            target,
            target_range.clone(),
            vf,
            vb,
        );

        if let Some((x, y)) = middle {
            conquer(source, source_range.start..x, target, target_range.start..y, vf, vb, blocks);
            conquer(source, x..source_range.end, target, y..target_range.end, vf, vb, blocks);
        }
    }

    push_block(blocks, suffix_start.0, suffix_start.1, suffix);
}

#[cfg(test)]
mod tests {
    use insta::assert_debug_snapshot;
    use pretty_assertions::assert_eq;

    use super::*;

    fn blocks(source: &str, target: &str) -> Vec<(usize, usize, usize)> {
        let source = source.chars().collect::<Vec<_>>();
        let target = target.chars().collect::<Vec<_>>();

        myers_matching_blocks(&source, &target)
            .into_iter()
            .map(|block| (block.source, block.target, block.length))
            .collect()
    }

    #[test]
    fn test_empty() {
        assert!(blocks("", "").is_empty());
        assert!(blocks("abc", "").is_empty());
        assert!(blocks("", "abc").is_empty());
    }

    #[test]
    fn test_identical_content_is_one_block() {
        assert_eq!(blocks("abc", "abc"), vec![(0, 0, 3)]);
    }

    #[test]
    fn test_insertions() {
        assert_eq!(blocks("aXb", "ab"), vec![(0, 0, 1), (2, 1, 1)]);
        assert_eq!(blocks("XXab", "ab"), vec![(2, 0, 2)]);
        assert_eq!(blocks("abXX", "ab"), vec![(0, 0, 2)]);
    }

    #[test]
    fn test_complex_diff() {
        assert_debug_snapshot!(blocks("abcd", "axcy"), @r"
        [
            (
                0,
                0,
                1,
            ),
            (
                2,
                2,
                1,
            ),
        ]
        ");
    }

    #[test]
    fn test_target_subsequence_is_fully_covered() {
        let source = "The quick brown fox, as it happens, jumps over the lazy dog.";
        let target = "The brown fox jumps over the dog.";

        let covered: usize = blocks(source, target).iter().map(|block| block.2).sum();

        assert_eq!(covered, target.chars().count());
    }
}
