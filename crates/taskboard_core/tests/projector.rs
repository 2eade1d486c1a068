use taskboard_core::{project, Priority, SortCriterion, Task, TaskId, ViewQuery};

fn task(id: &str, title: &str, priority: Priority, completed: bool) -> Task {
    let mut task = Task::with_id(TaskId::from(id), title, "").unwrap();
    task.priority = priority;
    task.completed = completed;
    task
}

fn ids(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|task| task.id.to_string()).collect()
}

#[test]
fn priority_sort_is_descending_and_stable() {
    let tasks = vec![
        task("A", "a", Priority::High, false),
        task("B", "b", Priority::Low, false),
        task("C", "c", Priority::High, false),
    ];

    let view = project(&tasks, "", SortCriterion::Priority);
    assert_eq!(ids(&view), ["A", "C", "B"]);
}

#[test]
fn priority_sort_keeps_insertion_order_within_each_rank() {
    let tasks = vec![
        task("m1", "m1", Priority::Medium, false),
        task("l1", "l1", Priority::Low, false),
        task("h1", "h1", Priority::High, false),
        task("m2", "m2", Priority::Medium, false),
        task("l2", "l2", Priority::Low, false),
        task("h2", "h2", Priority::High, false),
    ];

    let view = project(&tasks, "", SortCriterion::Priority);
    assert_eq!(ids(&view), ["h1", "h2", "m1", "m2", "l1", "l2"]);
}

#[test]
fn completion_sort_puts_completed_first() {
    let tasks = vec![
        task("A", "a", Priority::Medium, false),
        task("B", "b", Priority::Medium, true),
    ];

    let view = project(&tasks, "", SortCriterion::Completion);
    assert_eq!(ids(&view), ["B", "A"]);
}

#[test]
fn completion_sort_is_stable() {
    let tasks = vec![
        task("o1", "x", Priority::Low, false),
        task("d1", "x", Priority::Low, true),
        task("o2", "x", Priority::High, false),
        task("d2", "x", Priority::High, true),
    ];

    let view = project(&tasks, "", SortCriterion::Completion);
    assert_eq!(ids(&view), ["d1", "d2", "o1", "o2"]);
}

#[test]
fn alphabetical_sort_is_case_insensitive_ascending() {
    let tasks = vec![
        task("1", "banana", Priority::Medium, false),
        task("2", "Apple", Priority::Medium, false),
        task("3", "cherry", Priority::Medium, false),
        task("4", "Éclair", Priority::Medium, false),
    ];

    let view = project(&tasks, "", SortCriterion::Alphabetical);
    assert_eq!(ids(&view), ["2", "1", "3", "4"]);
}

#[test]
fn alphabetical_sort_folds_accents_beyond_latin1() {
    let tasks = vec![
        task("dog", "dog", Priority::Medium, false),
        task("caj", "Čaj", Priority::Medium, false),
        task("apple", "apple", Priority::Medium, false),
        task("slon", "Śliwka", Priority::Medium, false),
        task("zebra", "zebra", Priority::Medium, false),
    ];

    let view = project(&tasks, "", SortCriterion::Alphabetical);
    assert_eq!(ids(&view), ["apple", "caj", "dog", "slon", "zebra"]);
}

#[test]
fn alphabetical_sort_puts_punctuation_first() {
    let tasks = vec![
        task("dog", "dog", Priority::Medium, false),
        task("caj", "Čaj", Priority::Medium, false),
        task("brace", "{x}", Priority::Medium, false),
        task("apple", "apple", Priority::Medium, false),
    ];

    let view = project(&tasks, "", SortCriterion::Alphabetical);
    assert_eq!(ids(&view), ["brace", "apple", "caj", "dog"]);
}

#[test]
fn alphabetical_sort_keeps_identical_titles_in_order() {
    let tasks = vec![
        task("second-b", "beta", Priority::Medium, false),
        task("first", "Alpha", Priority::High, false),
        task("second-a", "beta", Priority::Low, true),
        task("second-c", "beta", Priority::Medium, false),
    ];

    let view = project(&tasks, "", SortCriterion::Alphabetical);
    assert_eq!(ids(&view), ["first", "second-b", "second-a", "second-c"]);
}

#[test]
fn filter_is_case_insensitive_substring_on_title() {
    let tasks = vec![
        task("1", "my task", Priority::Medium, false),
        task("2", "groceries", Priority::Medium, false),
        task("3", "Tasks for Monday", Priority::Medium, false),
    ];

    let view = project(&tasks, "TASK", SortCriterion::Priority);
    assert_eq!(ids(&view), ["1", "3"]);
}

#[test]
fn filter_ignores_description() {
    let mut described = task("1", "title", Priority::Medium, false);
    described.description = "needle".to_string();
    let tasks = vec![described];

    assert!(project(&tasks, "needle", SortCriterion::Priority).is_empty());
}

#[test]
fn empty_search_matches_everything_and_empty_input_yields_empty() {
    let tasks = vec![
        task("1", "one", Priority::Medium, false),
        task("2", "two", Priority::Medium, false),
    ];

    assert_eq!(project(&tasks, "", SortCriterion::Alphabetical).len(), 2);
    assert!(project(&[], "anything", SortCriterion::Completion).is_empty());
    assert!(project(&[], "", SortCriterion::Priority).is_empty());
}

#[test]
fn projection_borrows_without_mutating() {
    let tasks = vec![
        task("1", "b", Priority::Low, true),
        task("2", "a", Priority::High, false),
    ];
    let snapshot = tasks.clone();

    let view = ViewQuery::new("", SortCriterion::Alphabetical).project(&tasks);
    assert!(std::ptr::eq(view[0], &tasks[1]));
    assert_eq!(tasks, snapshot);
}

#[test]
fn sort_criterion_uses_wire_names() {
    for criterion in SortCriterion::ALL {
        let json = serde_json::to_value(criterion).unwrap();
        assert_eq!(json, criterion.as_str());
        assert_eq!(
            serde_json::from_value::<SortCriterion>(json).unwrap(),
            criterion
        );
    }
    assert_eq!(SortCriterion::default(), SortCriterion::Priority);
    assert_eq!(SortCriterion::Completion.to_string(), "completion");
    assert!(serde_json::from_str::<SortCriterion>("\"newest\"").is_err());
}
