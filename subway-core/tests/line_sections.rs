use hashbrown::HashSet;
use subway_core::prelude::*;

fn station(id: StationId) -> Station {
    Station::new(id, format!("Station {id}"))
}

fn ids(stations: &[Station]) -> Vec<StationId> {
    stations.iter().map(Station::id).collect()
}

/// Every consecutive pair of stations is exactly one of the line's segments
/// and no station appears twice.
fn assert_connected(line: &Line) {
    let stations = line.stations().unwrap();
    assert_eq!(stations.len(), line.segments().len() + 1);

    let unique: HashSet<_> = stations.iter().collect();
    assert_eq!(unique.len(), stations.len(), "repeated station in {stations:?}");

    for pair in stations.windows(2) {
        assert!(
            line.segments()
                .iter()
                .any(|s| s.up_station() == &pair[0] && s.down_station() == &pair[1]),
            "no segment {} -> {}",
            pair[0].id(),
            pair[1].id()
        );
    }
}

#[test]
fn chain_stays_connected_through_mixed_insertions() {
    let mut line = Line::with_segment(1, "Line 1", "blue", station(10), station(20), 100).unwrap();

    // tail, head, split from below, split from above, tail again
    line.add_segment(station(20), station(30), 50).unwrap();
    assert_connected(&line);
    line.add_segment(station(5), station(10), 7).unwrap();
    assert_connected(&line);
    line.add_segment(station(15), station(20), 40).unwrap();
    assert_connected(&line);
    line.add_segment(station(20), station(25), 10).unwrap();
    assert_connected(&line);
    line.add_segment(station(30), station(40), 1).unwrap();
    assert_connected(&line);

    assert_eq!(ids(&line.stations().unwrap()), vec![5, 10, 15, 20, 25, 30, 40]);

    let total: Distance = line.segments().iter().map(Segment::distance).sum();
    assert_eq!(total, 100 + 50 + 7 + 1);
}

#[test]
fn split_adds_exactly_one_station() {
    let mut line = Line::with_segment(1, "Line 1", "blue", station(1), station(2), 10).unwrap();
    line.add_segment(station(2), station(3), 10).unwrap();
    let before = line.stations().unwrap().len();

    line.add_segment(station(4), station(3), 4).unwrap();

    let stations = line.stations().unwrap();
    assert_eq!(stations.len(), before + 1);
    assert_eq!(ids(&stations), vec![1, 2, 4, 3]);

    let remnant = line.chain().from_down_station(&station(4)).unwrap();
    assert_eq!(remnant.up_station(), &station(2));
    assert_eq!(remnant.distance(), 6);
    let inserted = line.chain().from_up_station(&station(4)).unwrap();
    assert_eq!(inserted.down_station(), &station(3));
    assert_eq!(inserted.distance(), 4);
}

#[test]
fn insufficient_length_leaves_line_unchanged() {
    let mut line = Line::with_segment(1, "Line 1", "blue", station(1), station(2), 10).unwrap();
    line.add_segment(station(2), station(3), 10).unwrap();
    let before = line.segments().to_vec();

    for distance in [10, 11, 50] {
        assert!(matches!(
            line.add_segment(station(4), station(3), distance),
            Err(Error::InsufficientLineLength { existing: 10, .. })
        ));
        assert!(matches!(
            line.add_segment(station(1), station(4), distance),
            Err(Error::InsufficientLineLength { existing: 10, .. })
        ));
    }

    assert_eq!(line.segments(), before.as_slice());
}

#[test]
fn removal_only_at_tail() {
    let mut line = Line::with_segment(1, "Line 1", "blue", station(1), station(2), 10).unwrap();
    line.add_segment(station(2), station(3), 10).unwrap();
    line.add_segment(station(3), station(4), 10).unwrap();

    for id in [1, 2, 3, 99] {
        assert!(matches!(
            line.remove_segment(&station(id)),
            Err(Error::InvalidRemoval(got)) if got == id
        ));
    }
    assert_eq!(line.segments().len(), 3);

    line.remove_segment(&station(4)).unwrap();
    line.remove_segment(&station(3)).unwrap();
    assert_eq!(ids(&line.stations().unwrap()), vec![1, 2]);

    // the last segment always stays
    for id in [1, 2] {
        assert!(matches!(
            line.remove_segment(&station(id)),
            Err(Error::CannotRemoveOnlySegment)
        ));
    }
    assert_eq!(line.segments().len(), 1);
}

#[test]
fn first_and_last_follow_insertions() {
    let mut line = Line::with_segment(1, "Line 1", "blue", station(2), station(3), 10).unwrap();
    line.add_segment(station(1), station(2), 10).unwrap();

    let chain = line.chain();
    let head = chain.from_up_station(&station(1)).unwrap();
    let tail = chain.from_down_station(&station(3)).unwrap();

    assert!(chain.is_first(head));
    assert!(!chain.is_last(head));
    assert!(chain.is_last(tail));
    assert!(!chain.is_first(tail));
}
