//! Board lifecycle tests against the in-memory store.

use super::helpers::{assert_statuses_match_columns, service_over, store, titles};
use rstest::rstest;
use stageboard::board::{
    adapters::memory::InMemoryProjectStore,
    domain::{Project, Stage},
    ports::ProjectStore,
    services::{CreateProjectRequest, CreateTaskRequest},
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

#[rstest]
fn projects_keep_creation_order_and_are_never_removed(store: InMemoryProjectStore) {
    let service = service_over(&store, 1);
    for name in ["Alpha", "Beta", "Gamma"] {
        service
            .create_project(CreateProjectRequest::new(name))
            .expect("project creation should succeed");
        service.close_project().expect("close");
    }

    let names: Vec<String> = service
        .list_projects()
        .expect("list")
        .iter()
        .map(|project| project.name().to_owned())
        .collect();
    assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
}

#[rstest]
fn every_mutation_is_visible_in_the_collection(store: InMemoryProjectStore) {
    let service = service_over(&store, 1);
    service
        .create_project(CreateProjectRequest::new("Launch").with_description("v1"))
        .expect("project creation should succeed");
    let first = service
        .create_task(CreateTaskRequest::new(Stage::Todo, "Design mock"))
        .expect("task creation should succeed")
        .id();
    let second = service
        .create_task(CreateTaskRequest::new(Stage::Todo, "Write copy"))
        .expect("task creation should succeed")
        .id();

    let steps: [&dyn Fn() -> bool; 4] = [
        &|| service.start(first).expect("start").is_applied(),
        &|| service.complete_and_send_to_review(first).expect("submit").is_applied(),
        &|| service.approve(first, "Product Owner").expect("approve").is_applied(),
        &|| service.delete_task(second, Stage::Todo).expect("delete").is_applied(),
    ];
    for step in steps {
        assert!(step());
        let snapshot = store.snapshot().expect("snapshot");
        let current = snapshot.current.as_ref().expect("project open");
        assert_eq!(Some(current), snapshot.project(current.id()));
        assert_statuses_match_columns(current);
    }

    let project = service.current_project().expect("current").expect("open");
    assert_eq!(titles(&project, Stage::Done), vec!["Design mock"]);
    assert_eq!(project.task_count(), 1);
}

#[rstest]
fn services_sharing_a_store_see_each_other(store: InMemoryProjectStore) {
    let writer = service_over(&store, 1);
    let reader = service_over(&store, 2);

    let project = writer
        .create_project(CreateProjectRequest::new("Shared"))
        .expect("project creation should succeed");
    let _ = writer
        .create_task(CreateTaskRequest::new(Stage::Review, "Check"))
        .expect("task creation should succeed");

    let seen = reader.current_project().expect("current").expect("open");
    assert_eq!(seen.id(), project.id());
    assert_eq!(titles(&seen, Stage::Review), vec!["Check"]);
}

#[rstest]
fn concurrent_task_creation_loses_nothing(store: InMemoryProjectStore) {
    let service = service_over(&store, 1);
    service
        .create_project(CreateProjectRequest::new("Busy"))
        .expect("project creation should succeed");

    thread::scope(|scope| {
        for worker in 0..4 {
            let handle = service.clone();
            scope.spawn(move || {
                for n in 0..25 {
                    let _ = handle
                        .create_task(CreateTaskRequest::new(Stage::Todo, format!("w{worker}-{n}")))
                        .expect("task creation should succeed");
                }
            });
        }
    });

    let project = service.current_project().expect("current").expect("open");
    assert_eq!(project.task_count(), 100);
    assert_eq!(project.column(Stage::Todo).len(), 100);
}

#[rstest]
fn concurrent_transitions_move_each_task_once(store: InMemoryProjectStore) {
    let service = service_over(&store, 1);
    service
        .create_project(CreateProjectRequest::new("Race"))
        .expect("project creation should succeed");
    let task_id = service
        .create_task(CreateTaskRequest::new(Stage::Todo, "Contended"))
        .expect("task creation should succeed")
        .id();

    let applied = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let handle = service.clone();
                scope.spawn(move || handle.start(task_id).expect("start").is_applied())
            })
            .collect();
        handles
            .into_iter()
            .map(|join| join.join().expect("thread should not panic"))
            .filter(|applied| *applied)
            .count()
    });

    assert_eq!(applied, 1);
    let project = service.current_project().expect("current").expect("open");
    assert_eq!(titles(&project, Stage::InProgress), vec!["Contended"]);
    assert!(project.column(Stage::Todo).is_empty());
}

#[rstest]
fn readers_never_see_a_created_project_before_it_opens(store: InMemoryProjectStore) {
    let service = service_over(&store, 1);
    let reader = service_over(&store, 2);
    let done = AtomicBool::new(false);

    let torn = thread::scope(|scope| {
        let watcher = scope.spawn(|| {
            let mut torn = 0_usize;
            while !done.load(Ordering::Acquire) {
                let snapshot = reader.snapshot().expect("snapshot");
                let newest = snapshot.projects.last().map(Project::id);
                if newest != snapshot.current_id() {
                    torn += 1;
                }
            }
            torn
        });
        for n in 0..200 {
            service
                .create_project(CreateProjectRequest::new(format!("p{n}")))
                .expect("project creation should succeed");
        }
        done.store(true, Ordering::Release);
        watcher.join().expect("thread should not panic")
    });

    assert_eq!(torn, 0);
    assert_eq!(service.list_projects().expect("list").len(), 200);
}
