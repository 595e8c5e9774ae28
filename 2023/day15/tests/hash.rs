use aoc2023_day15::hash;

#[test]
fn hash_of_word() {
    assert_eq!(hash("HASH"), 52);
}

#[test]
fn labels_share_box() {
    assert_eq!(hash("rn"), 0);
    assert_eq!(hash("cm"), 0);
    assert_eq!(hash("qp"), 1);
}
