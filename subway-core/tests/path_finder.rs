use subway_core::prelude::*;

fn station(id: StationId) -> Station {
    Station::new(id, format!("Station {id}"))
}

fn line(id: LineId, segments: &[(StationId, StationId, Distance)]) -> Line {
    let mut line = Line::new(id, format!("Line {id}"), "gray");
    for &(up, down, distance) in segments {
        line.add_segment(station(up), station(down), distance).unwrap();
    }
    line
}

/// Gyodae(1) - Gangnam(2) - Yangjae(3) on two lines, with a cheap detour
/// through Nambu Terminal(4)
fn lines() -> Vec<Line> {
    vec![
        line(2, &[(1, 2, 10)]),
        line(9, &[(2, 3, 10)]),
        line(3, &[(1, 4, 2), (4, 3, 3)]),
    ]
}

#[test]
fn direct_segment_beats_two_hops() {
    let lines = vec![line(1, &[(1, 2, 10)]), line(2, &[(2, 3, 10)]), line(3, &[(1, 3, 15)])];
    let finder = PathFinder::new(&lines);

    assert_eq!(
        finder.shortest_path_stations(&station(1), &station(3)).unwrap(),
        vec![station(1), station(3)]
    );
    assert_eq!(finder.shortest_path_distance(&station(1), &station(3)).unwrap(), 15);
}

#[test]
fn distance_matches_path_weights() {
    let lines = lines();
    let finder = PathFinder::new(&lines);

    for source in 1..=4 {
        for target in 1..=4 {
            let (source, target) = (station(source), station(target));
            let Ok(stations) = finder.shortest_path_stations(&source, &target) else {
                continue;
            };
            let summed: PathDistance = stations
                .windows(2)
                .map(|pair| {
                    lines
                        .iter()
                        .flat_map(Line::segments)
                        .filter(|s| s.up_station() == &pair[0] && s.down_station() == &pair[1])
                        .map(Segment::distance)
                        .min()
                        .map(PathDistance::from)
                        .unwrap()
                })
                .sum();

            assert_eq!(
                finder.shortest_path_distance(&source, &target).unwrap(),
                summed
            );
        }
    }
}

#[test]
fn unconnected_stations() {
    let lines = vec![line(1, &[(1, 2, 10)]), line(2, &[(3, 4, 10)])];
    let finder = PathFinder::new(&lines);

    let err = finder.shortest_path_stations(&station(1), &station(4)).unwrap_err();
    assert!(matches!(err, Error::DisconnectedPath { from: 1, to: 4 }));
    assert_eq!(err.to_string(), "Stations 1 and 4 are not connected");
}

#[test]
fn rebuilt_finder_sees_removed_segment() {
    let mut lines = lines();
    let before = PathFinder::new(&lines);
    assert_eq!(before.shortest_path_distance(&station(1), &station(3)).unwrap(), 5);

    // Nambu Terminal -> Yangjae goes away; only the Gangnam route is left
    lines[2].add_segment(station(3), station(5), 1).unwrap();
    lines[2].remove_segment(&station(5)).unwrap();
    assert_eq!(before.shortest_path_distance(&station(1), &station(3)).unwrap(), 5);

    let mut line_three = line(3, &[(1, 4, 2)]);
    line_three.add_segment(station(6), station(1), 1).unwrap();
    lines[2] = line_three;

    let after = PathFinder::new(&lines);
    let path = after.shortest_path(&station(1), &station(3)).unwrap();
    assert_eq!(path.stations(), &[station(1), station(2), station(3)]);
    assert_eq!(path.distance(), 20);
}
