use fullpath::{clean, join, Separator};

const CHARS: &[char] = &['/', '.', 'a'];

#[test]
fn join_matches_nested_join() {
    let strings = all_strings(4);
    for a in &strings {
        for b in &strings {
            for c in ["", "a", "/", ".."] {
                let flat = join([a.as_str(), b.as_str(), c], Separator::Unix);
                let nested = join([join([a, b], Separator::Unix).as_str(), c], Separator::Unix);
                assert_eq!(flat, nested, "({:?}, {:?}, {:?})", a, b, c);
            }
        }
    }
}

#[test]
fn joined_paths_have_no_doubled_or_trailing_separator() {
    let strings = all_strings(4);
    for a in &strings {
        for b in &strings {
            let p = join([a, b], Separator::Unix);
            assert!(!p.contains("//"), "join({:?}, {:?}) = {:?}", a, b, p);
            assert!(p == "/" || !p.ends_with('/'), "join({:?}, {:?}) = {:?}", a, b, p);
        }
    }
}

#[test]
fn clean_is_idempotent() {
    for p in all_strings(6) {
        let once = clean(&p, Separator::Unix);
        assert_eq!(clean(&once, Separator::Unix), once, "clean({:?})", p);
    }
}

// Every string of length 0..=len over CHARS.
fn all_strings(len: usize) -> Vec<String> {
    let mut out = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..len {
        let mut next = Vec::new();
        for s in &frontier {
            for c in CHARS {
                let mut t = s.clone();
                t.push(*c);
                next.push(t);
            }
        }
        out.extend(next.iter().cloned());
        frontier = next;
    }
    out
}
