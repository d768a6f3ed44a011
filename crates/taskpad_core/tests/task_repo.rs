use taskpad_core::{
    InMemoryTaskRepository, Task, TaskId, TaskPatch, TaskRepository, MAX_TASK_ID,
};

fn open(title: &str) -> Task {
    Task::unassigned(title, "").unwrap()
}

#[test]
fn add_assigns_sequential_ids() {
    let mut repo = InMemoryTaskRepository::new();

    assert_eq!(repo.add_task(open("one")), 1);
    assert_eq!(repo.add_task(open("two")), 2);
    assert_eq!(repo.add_task(open("three")), 3);
    assert_eq!(repo.next_id(), 4);
}

#[test]
fn add_with_predefined_id_keeps_it() {
    let mut repo = InMemoryTaskRepository::new();

    let id = repo.add_task(Task::new(10, "imported", "", false).unwrap());
    assert_eq!(id, 10);
    assert_eq!(repo.get_task(10).unwrap().title, "imported");
    assert_eq!(repo.add_task(open("after import")), 11);
}

#[test]
fn get_missing_returns_none() {
    let repo = InMemoryTaskRepository::new();
    assert_eq!(repo.get_task(1), None);
}

#[test]
fn list_is_insertion_ordered() {
    let mut repo = InMemoryTaskRepository::new();
    assert!(repo.list_tasks().is_empty());

    repo.add_task(Task::new(9, "nine", "", false).unwrap());
    repo.add_task(open("ten"));
    repo.add_task(Task::new(4, "four", "", false).unwrap());

    let ids: Vec<_> = repo.list_tasks().into_iter().map(|task| task.id).collect();
    assert_eq!(ids, vec![9, 10, 4]);
}

#[test]
fn update_applies_only_present_fields() {
    let mut repo = InMemoryTaskRepository::new();
    let id = repo.add_task(Task::unassigned("title", "desc").unwrap());

    let patch = TaskPatch {
        description: Some("new desc".to_string()),
        ..TaskPatch::default()
    };
    assert!(repo.update_task(id, patch));

    let task = repo.get_task(id).unwrap();
    assert_eq!(task.title, "title");
    assert_eq!(task.description, "new desc");
    assert!(!task.completed);

    let patch = TaskPatch {
        title: Some("renamed".to_string()),
        completed: Some(true),
        ..TaskPatch::default()
    };
    assert!(repo.update_task(id, patch));

    let task = repo.get_task(id).unwrap();
    assert_eq!(task.title, "renamed");
    assert_eq!(task.description, "new desc");
    assert!(task.completed);
}

#[test]
fn update_missing_returns_false() {
    let mut repo = InMemoryTaskRepository::new();
    let patch = TaskPatch {
        title: Some("nobody".to_string()),
        ..TaskPatch::default()
    };
    assert!(!repo.update_task(42, patch));
}

#[test]
fn update_does_not_revalidate() {
    let mut repo = InMemoryTaskRepository::new();
    let id = repo.add_task(open("valid"));

    let patch = TaskPatch {
        title: Some(String::new()),
        ..TaskPatch::default()
    };
    assert!(repo.update_task(id, patch));
    assert_eq!(repo.get_task(id).unwrap().title, "");
}

#[test]
fn delete_reports_presence() {
    let mut repo = InMemoryTaskRepository::new();
    let id = repo.add_task(open("doomed"));

    assert!(repo.delete_task(id));
    assert!(!repo.delete_task(id));
    assert_eq!(repo.get_task(id), None);
    assert!(repo.list_tasks().is_empty());
}

#[test]
fn deleted_ids_are_not_recycled() {
    let mut repo = InMemoryTaskRepository::new();
    let first = repo.add_task(open("a"));
    repo.add_task(open("b"));
    repo.delete_task(first);

    assert_eq!(repo.add_task(open("c")), 3);
}

#[test]
fn toggle_flips_and_reports_presence() {
    let mut repo = InMemoryTaskRepository::new();
    let id = repo.add_task(open("flip"));

    assert!(repo.toggle_task(id));
    assert!(repo.get_task(id).unwrap().completed);
    assert!(repo.toggle_task(id));
    assert!(!repo.get_task(id).unwrap().completed);

    assert!(!repo.toggle_task(id + 1));
}

#[test]
fn returned_tasks_are_detached_copies() {
    let mut repo = InMemoryTaskRepository::new();
    let id = repo.add_task(open("original"));

    let mut copy = repo.get_task(id).unwrap();
    copy.title = "mutated".to_string();

    assert_eq!(repo.get_task(id).unwrap().title, "original");
}

#[test]
fn highest_explicit_id_keeps_counter_in_range() {
    let mut repo = InMemoryTaskRepository::new();

    let edge = Task::new(MAX_TASK_ID, "edge", "", false).unwrap();
    assert_eq!(repo.add_task(edge), MAX_TASK_ID);
    assert_eq!(repo.next_id(), TaskId::MAX);
    assert!(repo.next_id() > 0);
}

#[test]
fn unvalidated_max_id_does_not_overflow_counter() {
    let mut repo = InMemoryTaskRepository::new();
    let task = Task {
        id: TaskId::MAX,
        title: "edge".to_string(),
        description: String::new(),
        completed: false,
    };

    assert_eq!(repo.add_task(task), TaskId::MAX);
    assert_eq!(repo.next_id(), TaskId::MAX);
    assert!(repo.add_task(open("after edge")) > 0);
}
