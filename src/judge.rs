use crate::apsp::DistanceMatrix;
use crate::error::{ProtocolError, SamplingError};
use crate::rng::Xorshift;
use crate::scanner::TokenReader;
use crate::tree::{TreeParams, WeightedTree};
use std::io::{BufRead, Write};

pub const CORRECT: &str = "Correct!";
pub const WRONG_ANSWER: &str = "Wrong Answer!";

/// The contestant's view of the problem: ask distances, then commit to the
/// diameter once. Vertices are 0-based here; the wire format is 1-based.
pub trait Judge {
    fn num_vertices(&self) -> usize;
    fn query(&mut self, u: usize, v: usize) -> Result<i64, ProtocolError>;
    fn answer(&mut self, x: i64) -> Result<bool, ProtocolError>;
}

/// Judge holding the hidden tree in memory.
pub struct LocalJudge {
    dist: DistanceMatrix,
    diameter: i64,
    queries: usize,
    finished: bool,
}

impl LocalJudge {
    /// `dist` must already be relaxed.
    pub fn new(dist: DistanceMatrix) -> Self {
        let diameter = dist.diameter();
        Self {
            dist,
            diameter,
            queries: 0,
            finished: false,
        }
    }

    pub fn from_tree(tree: &WeightedTree) -> Self {
        Self::new(tree.all_pairs())
    }

    pub fn random(rng: &mut Xorshift, params: &TreeParams) -> Result<Self, SamplingError> {
        Ok(Self::from_tree(&WeightedTree::random(rng, params)?))
    }

    pub fn diameter(&self) -> i64 {
        self.diameter
    }

    pub fn queries(&self) -> usize {
        self.queries
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn check_vertex(&self, v: usize) -> Result<(), ProtocolError> {
        let n = self.num_vertices();
        if v < n {
            Ok(())
        } else {
            Err(ProtocolError::VertexOutOfRange { vertex: v + 1, n })
        }
    }
}

impl Judge for LocalJudge {
    fn num_vertices(&self) -> usize {
        self.dist.len()
    }
    fn query(&mut self, u: usize, v: usize) -> Result<i64, ProtocolError> {
        if self.finished {
            return Err(ProtocolError::SessionClosed);
        }
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.queries += 1;
        Ok(self.dist.get(u, v))
    }
    fn answer(&mut self, x: i64) -> Result<bool, ProtocolError> {
        if self.finished {
            return Err(ProtocolError::SessionClosed);
        }
        self.finished = true;
        let ok = x == self.diameter;
        if ok {
            eprintln!("!log status AC");
        } else {
            eprintln!("!log status WA");
        }
        eprintln!("!log queries {}", self.queries);
        Ok(ok)
    }
}

/// Contestant-side client speaking the wire protocol to an external judge.
pub struct StdioJudge<R: BufRead, W: Write> {
    input: TokenReader<R>,
    output: W,
    n: usize,
}

impl<R: BufRead, W: Write> StdioJudge<R, W> {
    /// Reads the vertex count the judge announces first.
    pub fn new(input: R, output: W) -> Result<Self, ProtocolError> {
        let mut input = TokenReader::new(input);
        let n = input.next()?;
        Ok(Self { input, output, n })
    }
}

impl<R: BufRead, W: Write> Judge for StdioJudge<R, W> {
    fn num_vertices(&self) -> usize {
        self.n
    }
    fn query(&mut self, u: usize, v: usize) -> Result<i64, ProtocolError> {
        writeln!(self.output, "? {} {}", u + 1, v + 1)?;
        self.output.flush()?;
        self.input.next()
    }
    fn answer(&mut self, x: i64) -> Result<bool, ProtocolError> {
        writeln!(self.output, "! {}", x)?;
        self.output.flush()?;
        let first = self.input.token()?;
        match first.as_str() {
            "Correct!" => Ok(true),
            "Wrong" => match self.input.token()?.as_str() {
                "Answer!" => Ok(false),
                other => Err(ProtocolError::UnexpectedResponse(format!("Wrong {other}"))),
            },
            _ => Err(ProtocolError::UnexpectedResponse(first)),
        }
    }
}

fn read_vertex<R: BufRead>(
    input: &mut TokenReader<R>,
    n: usize,
) -> Result<usize, ProtocolError> {
    let vertex: usize = input.next()?;
    if (1..=n).contains(&vertex) {
        Ok(vertex - 1)
    } else {
        Err(ProtocolError::VertexOutOfRange { vertex, n })
    }
}

/// Runs one judge session over a token stream.
///
/// Announces `n`, then answers `? u v` with the distance until any other
/// command character arrives (`?1 2` and `!10` need no space). That
/// command's integer argument is checked against the diameter and the
/// session ends. Every response is flushed. Returns whether the final answer
/// was accepted.
pub fn serve<R: BufRead, W: Write>(
    judge: &mut LocalJudge,
    input: R,
    mut output: W,
) -> Result<bool, ProtocolError> {
    if judge.is_finished() {
        return Err(ProtocolError::SessionClosed);
    }
    let n = judge.num_vertices();
    let mut input = TokenReader::new(input);
    writeln!(output, "{}", n)?;
    output.flush()?;
    loop {
        // The command is one character; anything glued to it is the next token.
        let token = input.token()?;
        let mut chars = token.chars();
        let command = chars.next();
        let rest = chars.as_str();
        if !rest.is_empty() {
            input.push_back(rest.to_owned());
        }
        if command == Some('?') {
            let u = read_vertex(&mut input, n)?;
            let v = read_vertex(&mut input, n)?;
            let d = judge.query(u, v)?;
            writeln!(output, "{}", d)?;
            output.flush()?;
        } else {
            let x: i64 = input.next()?;
            let ok = judge.answer(x)?;
            writeln!(output, "{}", if ok { CORRECT } else { WRONG_ANSWER })?;
            output.flush()?;
            return Ok(ok);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    // 0 -2- 1 -7- 2, 1 -3- 3: diameter is d(2, 3) = 10.
    fn fixed_judge() -> LocalJudge {
        let tree = WeightedTree {
            n: 4,
            edges: vec![(0, 1, 2), (1, 2, 7), (1, 3, 3)],
            attempts: 3,
        };
        LocalJudge::from_tree(&tree)
    }

    fn run(judge: &mut LocalJudge, script: &str) -> (Result<bool, ProtocolError>, String) {
        let mut out = vec![];
        let res = serve(judge, Cursor::new(script.to_string()), &mut out);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn answers_queries_then_accepts_diameter() {
        let mut judge = fixed_judge();
        assert_eq!(judge.diameter(), 10);
        let (res, out) = run(&mut judge, "? 1 2\n? 3 4\n! 10\n");
        assert!(res.unwrap());
        assert_eq!(out, "4\n2\n10\nCorrect!\n");
        assert_eq!(judge.queries(), 2);
        assert!(judge.is_finished());
    }

    #[test]
    fn rejects_off_by_one() {
        let mut judge = fixed_judge();
        let (res, out) = run(&mut judge, "! 9\n");
        assert!(!res.unwrap());
        assert_eq!(out, "4\nWrong Answer!\n");
    }

    #[test]
    fn any_other_marker_is_a_final_answer() {
        let mut judge = fixed_judge();
        let (res, _) = run(&mut judge, "a 10\n? 1 2\n");
        assert!(res.unwrap());
    }

    #[test]
    fn command_character_may_touch_its_argument() {
        let mut judge = fixed_judge();
        let (res, out) = run(&mut judge, "!10\n");
        assert!(res.unwrap());
        assert_eq!(out, "4\nCorrect!\n");

        let mut judge = fixed_judge();
        let (res, out) = run(&mut judge, "?1 2\n?3\n4\n!9\n");
        assert!(!res.unwrap());
        assert_eq!(out, "4\n2\n10\nWrong Answer!\n");
        assert_eq!(judge.queries(), 2);
    }

    #[test]
    fn non_utf8_input_is_an_error() {
        let mut judge = fixed_judge();
        let mut out = vec![];
        let res = serve(
            &mut judge,
            Cursor::new(vec![b'?', b' ', 0xff, 0xfe, b'\n']),
            &mut out,
        );
        assert!(matches!(res, Err(ProtocolError::Io(_))));
        assert!(!judge.is_finished());
    }

    #[test]
    fn input_after_answer_is_ignored() {
        let mut judge = fixed_judge();
        let (res, out) = run(&mut judge, "! 10\n? 1 2\n! 3\n");
        assert!(res.unwrap());
        assert_eq!(out, "4\nCorrect!\n");
    }

    #[test]
    fn session_is_single_use() {
        let mut judge = fixed_judge();
        assert!(run(&mut judge, "! 10\n").0.unwrap());
        assert!(matches!(
            run(&mut judge, "! 10\n").0,
            Err(ProtocolError::SessionClosed)
        ));
        assert!(matches!(judge.query(0, 1), Err(ProtocolError::SessionClosed)));
    }

    #[test]
    fn malformed_input_fails_fast() {
        let mut judge = fixed_judge();
        assert!(matches!(
            run(&mut judge, "? 1 x\n").0,
            Err(ProtocolError::InvalidToken { .. })
        ));
        let mut judge = fixed_judge();
        assert!(matches!(
            run(&mut judge, "? 0 1\n").0,
            Err(ProtocolError::VertexOutOfRange { vertex: 0, n: 4 })
        ));
        let mut judge = fixed_judge();
        assert!(matches!(
            run(&mut judge, "? 1 5\n").0,
            Err(ProtocolError::VertexOutOfRange { vertex: 5, n: 4 })
        ));
        let mut judge = fixed_judge();
        assert!(matches!(
            run(&mut judge, "? 1 2\n").0,
            Err(ProtocolError::UnexpectedEof)
        ));
    }

    #[test]
    fn stdio_judge_speaks_the_protocol() {
        let mut sent = vec![];
        {
            let replies = Cursor::new("4\n7\nWrong Answer!\n");
            let mut judge = StdioJudge::new(replies, &mut sent).unwrap();
            assert_eq!(judge.num_vertices(), 4);
            assert_eq!(judge.query(0, 3).unwrap(), 7);
            assert!(!judge.answer(12).unwrap());
        }
        assert_eq!(String::from_utf8(sent).unwrap(), "? 1 4\n! 12\n");
    }

    #[test]
    fn stdio_judge_rejects_unknown_verdicts() {
        let mut sink = vec![];
        let mut judge = StdioJudge::new(Cursor::new("2\nMaybe\n"), &mut sink).unwrap();
        assert!(matches!(
            judge.answer(1),
            Err(ProtocolError::UnexpectedResponse(s)) if s == "Maybe"
        ));
    }

    #[test]
    fn random_judge_is_reproducible() {
        let params = TreeParams::default();
        let a = LocalJudge::random(&mut Xorshift::with_seed(11), &params).unwrap();
        let b = LocalJudge::random(&mut Xorshift::with_seed(11), &params).unwrap();
        assert_eq!(a.num_vertices(), 10);
        assert_eq!(a.diameter(), b.diameter());
        assert!(a.diameter() > 0);
    }
}
