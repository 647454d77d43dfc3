use catalog::CatalogIndex;
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_dir = Path::new("data/catalog");

    println!("Loading catalog fixtures...\n");

    let start = Instant::now();
    let index = CatalogIndex::load_from_files(data_dir)
        .expect("Failed to load catalog fixtures");
    let elapsed = start.elapsed();

    let (providers, tests, results, appointments) = index.counts();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Providers: {}", providers);
    println!("Lab tests: {}", tests);
    println!("Lab results: {}", results);
    println!("Appointments: {}", appointments);
    println!(
        "\nAverage provider rating: {:.2}",
        index.stats().avg_provider_rating
    );
}
