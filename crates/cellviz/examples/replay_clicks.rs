//! Example: Normalizing a call graph and replaying clicks
//!
//! This example builds a small diagram from inline SVG, selects a cell and
//! prints the resulting highlight classes and SVG.

use cellviz::{DiagramBuilder, Selection};

const SOURCE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">
  <g id="1" class="node">
    <title>1</title>
    <g id="a_1:1"><a xlink:href="remove_me_url.cell.fn"><text>main</text></a></g>
    <g id="a_1:2"><a xlink:href="remove_me_url.cell.fn"><text>helper</text></a></g>
  </g>
  <g id="1:1 -> 1:2" class="edge modify-me">
    <title>1:1&#45;&gt;1:2</title>
    <path stroke-dasharray="5,2" d="M152,-140C200,-140 220,-120 220,-108 220,-96 200,-76 162.1,-76"/>
  </g>
</svg>"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let builder = DiagramBuilder::default();
    let mut diagram = builder.build(SOURCE)?;
    println!("Normalized: {:?}\n", diagram.report());

    for id in ["1:1", "1:1 -> 1:2", "1:1 -> 1:2", "1"] {
        let selection = diagram.click_by_id(id).clone();
        println!("click {id:<12} -> {selection}");

        if let Selection::Cell(cell) = &selection {
            let edge = diagram
                .element_by_id("1:1 -> 1:2")
                .ok_or("edge disappeared")?;
            println!("  edge classes while {cell} is selected: {}", edge.classes());
        }
    }

    println!("\n{}", builder.render_svg(&diagram)?);
    Ok(())
}
