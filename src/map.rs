//! The fixed road atlas the searches run against.

use searcher::Graph;

/// Principal cities, in presentation order.
const CITIES: [&str; 18] = [
    "Quito",
    "Guayaquil",
    "Cuenca",
    "Ambato",
    "Loja",
    "Manta",
    "Esmeraldas",
    "Santo Domingo",
    "Portoviejo",
    "Machala",
    "Ibarra",
    "Tulcán",
    "Riobamba",
    "Babahoyo",
    "Latacunga",
    "Quevedo",
    "Tena",
    "Puyo",
];

/// Road segments between cities, with approximate distances in
/// kilometres. Esmeraldas has no road segment and is unreachable from
/// every other city.
const ROADS: [(&str, &str, u32); 18] = [
    ("Quito", "Ibarra", 115),
    ("Ibarra", "Tulcán", 125),
    ("Quito", "Latacunga", 90),
    ("Latacunga", "Ambato", 45),
    ("Ambato", "Riobamba", 55),
    ("Riobamba", "Cuenca", 250),
    ("Cuenca", "Loja", 215),
    ("Guayaquil", "Cuenca", 197),
    ("Guayaquil", "Machala", 180),
    ("Guayaquil", "Babahoyo", 70),
    ("Babahoyo", "Quevedo", 90),
    ("Quevedo", "Santo Domingo", 120),
    ("Santo Domingo", "Quito", 150),
    ("Santo Domingo", "Manta", 180),
    ("Manta", "Portoviejo", 40),
    ("Portoviejo", "Quevedo", 150),
    ("Quito", "Tena", 190),
    ("Tena", "Puyo", 120),
];

/// Build the road atlas as an immutable graph.
///
/// Constructed once at startup and passed by reference into every
/// search; nothing mutates it afterwards.
pub fn road_map() -> Graph<String> {
    let mut graph = Graph::new();
    for &city in CITIES.iter() {
        graph.add_node(city.to_string());
    }
    for &(from, to, distance) in ROADS.iter() {
        graph.add_edge(from.to_string(), to.to_string(), distance);
    }
    graph
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_city_is_a_node() {
        let graph = road_map();
        assert_eq!(graph.len(), 18);
        for &city in CITIES.iter() {
            assert!(graph.contains(&city.to_string()), "missing {}", city);
        }
    }

    #[test]
    fn distances_are_symmetric() {
        let graph = road_map();
        for &(from, to, distance) in ROADS.iter() {
            let from = from.to_string();
            let to = to.to_string();
            assert_eq!(graph.weight(&from, &to), Some(distance));
            assert_eq!(graph.weight(&to, &from), Some(distance));
        }
    }

    #[test]
    fn esmeraldas_is_isolated() {
        let graph = road_map();
        assert!(graph.neighbors(&"Esmeraldas".to_string()).is_empty());
    }

    #[test]
    fn the_cheapest_route_quito_to_cuenca_takes_the_sierra_highway() {
        let graph = road_map();
        let report = searcher::ucs(&graph, &"Quito".to_string(), &"Cuenca".to_string()).unwrap();
        // Quito-Latacunga-Ambato-Riobamba-Cuenca is 440 km; the coastal
        // route through Santo Domingo and Guayaquil totals 627.
        let path: Vec<&str> = report.path.as_ref().unwrap().nodes().iter().map(|s| s.as_str()).collect();
        assert_eq!(path, vec!["Quito", "Latacunga", "Ambato", "Riobamba", "Cuenca"]);
        assert_eq!(report.cost, Some(440));
    }
}
