use std::collections::BTreeSet;
use std::io::Read;

// Index just past the first window of `n` bytes that are all distinct.
fn start_of_marker(signal: &[u8], n: usize) -> Option<usize> {
    signal
        .windows(n)
        .position(|window| window.iter().copied().collect::<BTreeSet<_>>().len() == window.len())
        .map(|i| i + n)
}

pub fn main() {
    let mut signal: Vec<u8> = std::io::stdin()
        .bytes()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    while signal.last().map_or(false, |b| b.is_ascii_whitespace()) {
        signal.pop();
    }

    for n in [4, 14] {
        println!("{}", start_of_marker(&signal, n).expect("marker present"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_of_packet_markers() {
        assert_eq!(start_of_marker(b"mjqjpqmgbljsphdztnvjfqwrcgsmlb", 4), Some(7));
        assert_eq!(start_of_marker(b"bvwbjplbgvbhsrlpgdmjqwftvncz", 4), Some(5));
        assert_eq!(start_of_marker(b"nppdvjthqldpwncqszvftbrmjlhg", 4), Some(6));
        assert_eq!(start_of_marker(b"zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 4), Some(11));
    }

    #[test]
    fn test_start_of_message_markers() {
        assert_eq!(start_of_marker(b"mjqjpqmgbljsphdztnvjfqwrcgsmlb", 14), Some(19));
        assert_eq!(start_of_marker(b"bvwbjplbgvbhsrlpgdmjqwftvncz", 14), Some(23));
        assert_eq!(start_of_marker(b"zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 14), Some(26));
    }

    #[test]
    fn test_signal_without_a_marker() {
        assert_eq!(start_of_marker(b"aabbaabb", 4), None);
        assert_eq!(start_of_marker(b"abc", 4), None);
    }
}
