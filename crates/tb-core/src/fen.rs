//! Structural FEN validation.
//!
//! This is a cheap syntax pass run before any position is built. It does not
//! judge whether the position is legal; that is left to the position parser.

use crate::variant::TablebaseVariant;

/// Check that `fen` has the six FEN fields in order and satisfies the king
/// rule of `variant`.
pub fn validate_fen(fen: &str, variant: TablebaseVariant) -> bool {
    check_fen(fen.as_bytes(), variant).is_some()
}

fn check_fen(fen: &[u8], variant: TablebaseVariant) -> Option<()> {
    let mut chars = fen.iter().copied();

    // 1. Board setup
    let (mut white_kings, mut black_kings) = (0u32, 0u32);
    for rank in (0..8).rev() {
        let mut file = 0u32;
        let mut last_was_number = false;

        while file < 8 {
            let c = chars.next()?;
            match c {
                b'1'..=b'8' => {
                    if last_was_number {
                        return None;
                    }
                    file += u32::from(c - b'0');
                    last_was_number = true;
                    continue;
                }
                b'k' => black_kings += 1,
                b'K' => white_kings += 1,
                b'p' | b'P' | b'n' | b'N' | b'b' | b'B' | b'r' | b'R' | b'q' | b'Q' => {}
                _ => return None,
            }
            last_was_number = false;
            file += 1;
        }

        if file != 8 {
            return None;
        }

        let separator = if rank > 0 { b'/' } else { b' ' };
        if chars.next()? != separator {
            return None;
        }
    }
    if !variant.kings_valid(white_kings, black_kings) {
        return None;
    }

    // 2. Turn
    if !matches!(chars.next()?, b'w' | b'b') {
        return None;
    }
    expect(&mut chars, b' ')?;

    // 3. Castling, standard or shredder style
    let mut c = chars.next()?;
    if c == b'-' {
        expect(&mut chars, b' ')?;
    } else {
        loop {
            if !matches!(c, b'a'..=b'h' | b'A'..=b'H' | b'k' | b'K' | b'q' | b'Q') {
                return None;
            }
            c = chars.next()?;
            if c == b' ' {
                break;
            }
        }
    }

    // 4. En passant
    let c = chars.next()?;
    if c != b'-' {
        if !(b'a'..=b'h').contains(&c) {
            return None;
        }
        if !matches!(chars.next()?, b'3' | b'6') {
            return None;
        }
    }
    expect(&mut chars, b' ')?;

    // 5. Halfmove clock. Digits are not enforced here; the position parser
    // rejects a malformed clock.
    chars.next()?;
    while chars.next()? != b' ' {}

    // 6. Fullmove number, which must end the string
    let mut c = chars.next()?;
    loop {
        if !c.is_ascii_digit() {
            return None;
        }
        match chars.next() {
            None => return Some(()),
            Some(b' ') => return None,
            Some(next) => c = next,
        }
    }
}

fn expect(chars: &mut impl Iterator<Item = u8>, expected: u8) -> Option<()> {
    (chars.next()? == expected).then_some(())
}
