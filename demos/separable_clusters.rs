use std::error::Error;
use std::fs::File;
use std::io::Write;

use linfa_hinge::dataset::generate;
use linfa_hinge::plot::Plot;
use linfa_hinge::prelude::*;
use linfa_hinge::report::Report;

fn main() -> std::result::Result<(), Box<dyn Error>> {
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "separable_clusters.svg".to_string());

    // two linearly separable clusters in the plane
    let dataset = generate::separable_clusters();

    println!("Training a linear SVM on {} samples ...", dataset.nsamples());
    let model = LinearSvm::params()
        .learning_rate(0.01)
        .epochs(10000)
        .lambda(0.01)
        .fit(&dataset)?;

    println!("{}", model);
    println!("{}", Report::new(model.parameters()));
    println!(
        "accuracy = {:.2}, margin satisfaction = {:.2}",
        accuracy(model.parameters(), &dataset)?,
        margin_satisfaction(model.parameters(), &dataset)?
    );

    let mut svg = File::create(&output)?;
    svg.write_all(Plot::new(&dataset, model.parameters())?.to_string().as_bytes())?;
    println!("Decision boundary written to {}", output);

    Ok(())
}
