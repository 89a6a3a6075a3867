//! When steps for board drag gesture BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::gesture::domain::DragElement;

fn full_drag(
    world: &mut BoardWorld,
    active: &DragElement,
    over: &DragElement,
) -> Result<(), eyre::Report> {
    world
        .service
        .drag_start(active.clone())
        .wrap_err("start drag")?;
    world
        .service
        .drag_over(active, Some(over))
        .wrap_err("hover during drag")?;
    world
        .service
        .drag_end(active, Some(over))
        .wrap_err("release drag")?;
    Ok(())
}

fn hover_only(
    world: &mut BoardWorld,
    active: DragElement,
    over: &DragElement,
) -> Result<(), eyre::Report> {
    world
        .service
        .drag_start(active.clone())
        .wrap_err("start drag")?;
    world
        .service
        .drag_over(&active, Some(over))
        .wrap_err("hover during drag")?;
    world.pending_drag = Some(active);
    Ok(())
}

#[when(r#"task "{task}" is dragged over task "{over}""#)]
fn task_dragged_over_task(
    world: &mut BoardWorld,
    task: String,
    over: String,
) -> Result<(), eyre::Report> {
    let active = world.task_element(&task)?;
    let target = world.task_element(&over)?;
    full_drag(world, &active, &target)
}

#[when(r#"task "{task}" is dragged over task "{over}" without dropping"#)]
fn task_hovered_over_task(
    world: &mut BoardWorld,
    task: String,
    over: String,
) -> Result<(), eyre::Report> {
    let active = world.task_element(&task)?;
    let target = world.task_element(&over)?;
    hover_only(world, active, &target)
}

#[when(r#"task "{task}" is dragged over column "{column}""#)]
fn task_dragged_over_column(
    world: &mut BoardWorld,
    task: String,
    column: String,
) -> Result<(), eyre::Report> {
    let active = world.task_element(&task)?;
    let target = world.column_element(&column)?;
    full_drag(world, &active, &target)
}

#[when(r#"column "{column}" is dragged over column "{over}" without dropping"#)]
fn column_hovered_over_column(
    world: &mut BoardWorld,
    column: String,
    over: String,
) -> Result<(), eyre::Report> {
    let active = world.column_element(&column)?;
    let target = world.column_element(&over)?;
    hover_only(world, active, &target)
}

#[when(r#"the drag is released over column "{column}""#)]
fn drag_released_over_column(world: &mut BoardWorld, column: String) -> Result<(), eyre::Report> {
    let active = world
        .pending_drag
        .take()
        .ok_or_else(|| eyre::eyre!("no pending drag in scenario world"))?;
    let target = world.column_element(&column)?;
    world
        .service
        .drag_end(&active, Some(&target))
        .wrap_err("release drag")?;
    Ok(())
}

#[when("the drag is cancelled")]
fn drag_cancelled(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let cancelled = world.service.drag_cancel();
    eyre::ensure!(
        cancelled == world.pending_drag.take(),
        "cancelled drag does not match the pending one"
    );
    Ok(())
}

#[when(r#"column "{column}" is deleted"#)]
fn column_deleted(world: &mut BoardWorld, column: String) -> Result<(), eyre::Report> {
    let id = world.column_id(&column)?;
    eyre::ensure!(world.service.delete_column(id), "column {column} was already gone");
    Ok(())
}
