// # Kyopro Templates
//
// Library behind the contest template binaries: a seedable xorshift engine,
// a random weighted tree with all-pairs distances, the interactive judge for
// the "tree diameter" problem, the random testcase generator and the greedy
// counting template.
//
// Every binary under `src/bin` is a thin `clap` wrapper around this crate.

/// A trait for conveniently updating a value to its minimum or maximum.
pub trait SetMinMax {
    /// If `v` is less than `self`, updates `self` to `v` and returns `true`.
    /// Otherwise, returns `false`.
    fn setmin(&mut self, v: Self) -> bool;
    /// If `v` is greater than `self`, updates `self` to `v` and returns `true`.
    /// Otherwise, returns `false`.
    fn setmax(&mut self, v: Self) -> bool;
}
impl<T> SetMinMax for T
where
    T: PartialOrd,
{
    fn setmin(&mut self, v: T) -> bool {
        *self > v && {
            *self = v;
            true
        }
    }
    fn setmax(&mut self, v: T) -> bool {
        *self < v && {
            *self = v;
            true
        }
    }
}

/// A macro for convenient initialization of vectors, including nested vectors for multi-dimensional arrays.
///
/// # Examples
///
/// ```
/// use kyopro_templates::mat;
/// // A simple vector
/// let v1 = mat![1, 2, 3];
///
/// // A 2x3 matrix initialized with zeros
/// let m1 = mat![0; 2; 3];
/// assert_eq!(m1, vec![vec![0, 0, 0], vec![0, 0, 0]]);
/// ```
#[macro_export]
macro_rules! mat {
    ($($e:expr),*) => { vec![$($e),*] };
    ($($e:expr,)*) => { vec![$($e),*] };
    ($e:expr; $d:expr) => { vec![$e; $d] };
    ($e:expr; $d:expr $(; $ds:expr)+) => { vec![mat![$e $(; $ds)*]; $d] };
}

/// Error kinds shared by the judge, the generators and the token reader.
pub mod error;

/// Seedable xorshift128 engine.
pub mod rng;

/// Disjoint-set-union with path compression and union by size.
pub mod dsu;

/// Random labeled spanning tree with integer edge weights.
pub mod tree;

/// All-pairs shortest paths (Floyd–Warshall) and diameter.
pub mod apsp;

/// Whitespace token reader returning `ProtocolError` instead of panicking.
pub mod scanner;

/// The interactive judge: in-memory judge, wire client and session loop.
pub mod judge;

/// Reference contestant for the interactive problem.
pub mod solver;

/// Random testcase generator for the greedy problem.
pub mod testcase;

/// The greedy counting template and its division helpers.
pub mod greedy;
