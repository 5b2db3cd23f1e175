// Structural properties of validation and the jump table, checked over a
// deterministic spread of generated programs.

use tapemachine::parser::jumps::{bracket_balance, validate, JumpTable};
use tapemachine::Program;

/// Small linear congruential generator so the corpus is reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

/// Random mix of commands, brackets not necessarily balanced
fn random_program(rng: &mut Lcg, len: usize) -> String {
    const ALPHABET: &[char] = &['>', '<', '+', '-', '[', ']', ',', '.', '$', 'x'];
    (0..len)
        .map(|_| ALPHABET[(rng.next() % ALPHABET.len() as u64) as usize])
        .collect()
}

/// Random program whose brackets are properly nested
fn nested_program(rng: &mut Lcg, len: usize) -> String {
    let mut out = String::new();
    let mut depth = 0;
    for _ in 0..len {
        match rng.next() % 4 {
            0 => {
                out.push('[');
                depth += 1;
            }
            1 if depth > 0 => {
                out.push(']');
                depth -= 1;
            }
            _ => out.push('+'),
        }
    }
    out.extend(std::iter::repeat(']').take(depth));
    out.push('$');
    out
}

/// Lowest bracket depth reached while scanning left to right
fn min_prefix_depth(src: &str) -> isize {
    let mut depth = 0isize;
    let mut lowest = 0isize;
    for c in src.chars() {
        match c {
            '[' => depth += 1,
            ']' => depth -= 1,
            _ => {}
        }
        lowest = lowest.min(depth);
    }
    lowest
}

#[test]
fn test_validation_iff_counter_zero() {
    let mut rng = Lcg(7);
    for _ in 0..500 {
        let len = (rng.next() % 24) as usize;
        let mut src = random_program(&mut rng, len);
        src.push('$');
        let program = Program::from_commands(&src);
        let valid = validate(&program).is_ok();

        if min_prefix_depth(&src) < 0 {
            // `]` before its `[` passes the counter but never pairs
            assert!(!valid, "program {:?}", src);
        } else {
            assert_eq!(bracket_balance(&program) == 0, valid, "program {:?}", src);
        }
    }

    let crossed = Program::from_commands("][$");
    assert_eq!(bracket_balance(&crossed), 0);
    assert!(validate(&crossed).is_err());
}

#[test]
fn test_pairs_form_bijection_and_nest() {
    let mut rng = Lcg(42);
    for _ in 0..300 {
        let len = (rng.next() % 40) as usize;
        let src = nested_program(&mut rng, len);
        let program = Program::from_commands(&src);
        let table = JumpTable::build(&program).expect("nested program must pair");

        let opens = src.chars().filter(|&c| c == '[').count();
        let pairs = table.pairs();
        assert_eq!(pairs.len(), opens);

        for &(open, close) in &pairs {
            assert!(open < close);
            assert_eq!(table.close_for(open), Some(close));
            assert_eq!(table.open_for(close), Some(open));
        }

        // Any two pairs are disjoint or one strictly contains the other
        for (i, &(a1, b1)) in pairs.iter().enumerate() {
            for &(a2, b2) in &pairs[i + 1..] {
                let disjoint = b1 < a2 || b2 < a1;
                let nested = (a1 < a2 && b2 < b1) || (a2 < a1 && b1 < b2);
                assert!(disjoint || nested, "{:?} overlaps {:?} in {}", (a1, b1), (a2, b2), src);
            }
        }
    }
}

#[test]
fn test_jump_table_is_idempotent() {
    let mut rng = Lcg(1234);
    for _ in 0..100 {
        let len = (rng.next() % 40) as usize;
        let program = Program::from_commands(&nested_program(&mut rng, len));
        let first = JumpTable::build(&program).unwrap();
        let second = JumpTable::build(&program).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.pairs(), second.pairs());
    }
}
