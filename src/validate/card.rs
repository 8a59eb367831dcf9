//! Luhn checksum validation for payment card numbers.

/// Luhn digit sum over `digits` (ASCII digits only).
///
/// Walking positions left to right with parity `len % 2`, digits at positions
/// matching the parity are doubled (minus 9 when the double exceeds 9). The
/// sequence passes when the sum is divisible by 10.
fn luhn_sum(digits: &[u8]) -> u32 {
    let parity = digits.len() % 2;

    digits
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            let d = u32::from(d - b'0');
            if i % 2 == parity {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum()
}

/// Whether `number` is a Luhn-valid card number.
///
/// Non-digit characters (spaces, dashes) are ignored. Input containing no
/// digits at all is rejected, even though the bare checksum of an empty
/// sequence would be zero.
pub fn credit_card(number: &str) -> bool {
    let digits: Vec<u8> = number.bytes().filter(|b| b.is_ascii_digit()).collect();
    if digits.is_empty() {
        return false;
    }
    luhn_sum(&digits) % 10 == 0
}
