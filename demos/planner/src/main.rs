//! planner — interactive menu for the city route planner.
//!
//! Thin glue around [`CityPlan`]: a numbered stdin menu, input validation
//! (well-typed ids, non-empty names, positive distances), and text
//! rendering of the core's results.  All graph and index semantics live in
//! the `cr-*` crates; nothing here mutates state except through the facade.
//!
//! Starts from the built-in sample city so every menu option has something
//! to chew on immediately.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use cr_core::LocationId;
use cr_plan::CityPlan;

fn main() -> Result<()> {
    println!("--- City Route Planner ---");
    let mut plan = CityPlan::sample_city();
    println!(
        "Sample city loaded: {} locations, {} roads.",
        plan.location_count(),
        plan.graph().road_count()
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu();
        let Some(choice) = read_u32(&mut input, "Choose an option: ")? else {
            break; // stdin closed
        };
        match choice {
            1 => add_location(&mut plan, &mut input)?,
            2 => remove_location(&mut plan, &mut input)?,
            3 => add_road(&mut plan, &mut input)?,
            4 => remove_road(&mut plan, &mut input)?,
            5 => show_connections(&plan),
            6 => show_locations_sorted(&plan),
            7 => shortest_route(&plan, &mut input)?,
            8 => bfs_traversal(&plan, &mut input)?,
            9 => dfs_traversal(&plan, &mut input)?,
            0 => break,
            _ => println!("Invalid choice. Pick a number from the menu."),
        }
    }
    println!("Goodbye!");
    Ok(())
}

fn print_menu() {
    println!();
    println!("--- City Menu ---");
    println!("1. Add a location");
    println!("2. Remove a location");
    println!("3. Add a road");
    println!("4. Remove a road");
    println!("5. Show all connections");
    println!("6. Show all locations (sorted by id)");
    println!("7. Find shortest route (Dijkstra)");
    println!("8. Breadth-first traversal");
    println!("9. Depth-first traversal");
    println!("0. Exit");
}

// ── Menu handlers ─────────────────────────────────────────────────────────────

fn add_location(plan: &mut CityPlan, input: &mut impl BufRead) -> Result<()> {
    let Some(id) = read_id(input, "Location id: ")? else { return Ok(()) };
    let Some(name) = read_nonempty(input, "Location name: ")? else { return Ok(()) };
    match plan.add_location(id, &name) {
        Ok(()) => println!("Added '{name}' (id {id})."),
        Err(err) => println!("ERROR: {err}."),
    }
    Ok(())
}

fn remove_location(plan: &mut CityPlan, input: &mut impl BufRead) -> Result<()> {
    let Some(id) = read_id(input, "Location id to remove: ")? else { return Ok(()) };
    match plan.remove_location(id) {
        Ok(()) => println!("Removed location {id} and all its roads."),
        Err(err) => println!("ERROR: {err}."),
    }
    Ok(())
}

fn add_road(plan: &mut CityPlan, input: &mut impl BufRead) -> Result<()> {
    let Some(a) = read_id(input, "From id: ")? else { return Ok(()) };
    let Some(b) = read_id(input, "To id: ")? else { return Ok(()) };
    let Some(distance) = read_u32(input, "Distance (positive integer): ")? else {
        return Ok(());
    };
    match plan.add_road(a, b, distance) {
        Ok(()) => println!("Added road {a} <-> {b} (distance {distance})."),
        Err(err) => println!("ERROR: {err}."),
    }
    Ok(())
}

fn remove_road(plan: &mut CityPlan, input: &mut impl BufRead) -> Result<()> {
    let Some(a) = read_id(input, "From id: ")? else { return Ok(()) };
    let Some(b) = read_id(input, "To id: ")? else { return Ok(()) };
    match plan.remove_road(a, b) {
        Ok(()) => println!("Removed road {a} <-> {b}."),
        Err(err) => println!("ERROR: {err}."),
    }
    Ok(())
}

fn show_connections(plan: &CityPlan) {
    if plan.location_count() == 0 {
        println!("No locations in the city.");
        return;
    }
    for (id, name) in plan.locations_sorted() {
        println!("{name} (id {id}) connects to:");
        // The id came from the index, so the graph has it too.
        let roads = plan.roads_from(id).unwrap_or_default();
        if roads.is_empty() {
            println!("  (no roads)");
        }
        for road in roads {
            let dest = plan.lookup(road.to).unwrap_or("?");
            println!("  {dest} (id {}, distance {})", road.to, road.distance);
        }
    }
}

fn show_locations_sorted(plan: &CityPlan) {
    if plan.location_count() == 0 {
        println!("No locations in the city.");
        return;
    }
    println!("Locations, sorted by id:");
    for (id, name) in plan.locations_sorted() {
        println!("  {id}: {name}");
    }
}

fn shortest_route(plan: &CityPlan, input: &mut impl BufRead) -> Result<()> {
    let Some(start) = read_id(input, "Start id: ")? else { return Ok(()) };
    let Some(end) = read_id(input, "End id: ")? else { return Ok(()) };
    match plan.shortest_path(start, end) {
        Ok(route) => {
            println!("Total distance: {}", route.total_distance);
            println!("Route: {}", render_stops(plan, &route.stops));
        }
        Err(err) => println!("ERROR: {err}."),
    }
    Ok(())
}

fn bfs_traversal(plan: &CityPlan, input: &mut impl BufRead) -> Result<()> {
    let Some(start) = read_id(input, "Start id: ")? else { return Ok(()) };
    match plan.breadth_first(start) {
        Ok(order) => println!("BFS order: {}", render_stops(plan, &order)),
        Err(err) => println!("ERROR: {err}."),
    }
    Ok(())
}

fn dfs_traversal(plan: &CityPlan, input: &mut impl BufRead) -> Result<()> {
    let Some(start) = read_id(input, "Start id: ")? else { return Ok(()) };
    match plan.depth_first(start) {
        Ok(order) => println!("DFS order: {}", render_stops(plan, &order)),
        Err(err) => println!("ERROR: {err}."),
    }
    Ok(())
}

fn render_stops(plan: &CityPlan, stops: &[LocationId]) -> String {
    stops
        .iter()
        .map(|&id| format!("{} ({id})", plan.lookup(id).unwrap_or("?")))
        .collect::<Vec<_>>()
        .join(" -> ")
}

// ── Input validation ──────────────────────────────────────────────────────────
//
// Each reader re-prompts until the input parses, and returns `Ok(None)`
// only when stdin is exhausted so the menu loop can exit cleanly.

fn read_line(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

fn read_u32(input: &mut impl BufRead, prompt: &str) -> Result<Option<u32>> {
    loop {
        let Some(line) = read_line(input, prompt)? else { return Ok(None) };
        match line.parse::<u32>() {
            Ok(n) => return Ok(Some(n)),
            Err(_) => println!("Please enter a non-negative integer."),
        }
    }
}

fn read_id(input: &mut impl BufRead, prompt: &str) -> Result<Option<LocationId>> {
    Ok(read_u32(input, prompt)?.map(LocationId))
}

fn read_nonempty(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    loop {
        let Some(line) = read_line(input, prompt)? else { return Ok(None) };
        if line.is_empty() {
            println!("Input cannot be empty.");
            continue;
        }
        return Ok(Some(line));
    }
}
