//! Given steps for board drag gesture BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a column "{label}""#)]
fn a_column(world: &mut BoardWorld, label: String) -> Result<(), eyre::Report> {
    let column = world
        .service
        .create_column()
        .wrap_err("create column for scenario")?;
    eyre::ensure!(
        world.service.rename_column(column.id(), label.clone()),
        "freshly created column {label} vanished"
    );
    world.columns.insert(label, column.id());
    Ok(())
}

#[given(r#"a task "{label}" in column "{column}""#)]
fn a_task_in_column(
    world: &mut BoardWorld,
    label: String,
    column: String,
) -> Result<(), eyre::Report> {
    let column_id = world.column_id(&column)?;
    let task = world
        .service
        .create_task(column_id)
        .wrap_err("create task for scenario")?;
    eyre::ensure!(
        world.service.rename_task(task.id(), label.clone()),
        "freshly created task {label} vanished"
    );
    world.tasks.insert(label, task.id());
    Ok(())
}
