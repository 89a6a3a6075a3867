//! Then steps for board drag gesture BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::then;

fn labels(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_owned)
        .collect()
}

#[then(r#"column "{column}" lists "{tasks}""#)]
fn column_lists(world: &BoardWorld, column: String, tasks: String) -> Result<(), eyre::Report> {
    let id = world.column_id(&column)?;
    let actual: Vec<String> = world
        .service
        .tasks_of(id)
        .iter()
        .map(|task| task.content().to_owned())
        .collect();
    let expected = labels(&tasks);

    eyre::ensure!(
        actual == expected,
        "column {column}: expected {expected:?}, found {actual:?}"
    );
    eyre::ensure!(
        world.service.task_count(id) == expected.len(),
        "task count disagrees with listed tasks"
    );
    Ok(())
}

#[then(r#"task "{task}" is at flat position {index:usize}"#)]
fn task_at_flat_position(
    world: &BoardWorld,
    task: String,
    index: usize,
) -> Result<(), eyre::Report> {
    let id = world.task_id(&task)?;
    let position = world
        .service
        .store()
        .tasks()
        .iter()
        .position(|candidate| candidate.id() == id)
        .ok_or_else(|| eyre::eyre!("task {task} is not on the board"))?;

    eyre::ensure!(
        position == index,
        "task {task}: expected flat position {index}, found {position}"
    );
    Ok(())
}

#[then(r#"the column order is "{order}""#)]
fn column_order_is(world: &BoardWorld, order: String) -> Result<(), eyre::Report> {
    let actual: Vec<String> = world
        .service
        .columns()
        .iter()
        .map(|column| column.title().to_owned())
        .collect();
    let expected = labels(&order);

    eyre::ensure!(
        actual == expected,
        "expected column order {expected:?}, found {actual:?}"
    );
    Ok(())
}

#[then("no drag is in progress")]
fn no_drag_in_progress(world: &BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(!world.service.is_dragging(), "a drag is still in progress");
    eyre::ensure!(world.service.active_drag().is_none(), "overlay still set");
    Ok(())
}

#[then(r#"task "{task}" no longer exists"#)]
fn task_no_longer_exists(world: &BoardWorld, task: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&task)?;
    eyre::ensure!(world.service.task(id).is_none(), "task {task} still exists");
    Ok(())
}
