use aoc2024_day22::next_secret;

#[test]
fn secret_evolves_as_in_puzzle() {
    let expects = [
        15887950, 16495136, 527345, 704524, 1553684, 12683156, 11100544, 12249484, 7753432,
        5908254,
    ];
    let mut secret = 123;
    for expect in expects {
        secret = next_secret(secret);
        assert_eq!(secret, expect);
    }
}
