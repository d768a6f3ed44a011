//! Interactive text menu over `TaskService`.
//!
//! # Responsibility
//! - Prompt, parse raw text into ids, confirm deletes, render results.
//! - Keep every service failure inside the loop; only I/O errors escape.
//!
//! # Invariants
//! - End of input at any prompt ends the session cleanly.

use log::{debug, info};
use std::io::{self, BufRead, Write};
use taskpad_core::{
    Task, TaskId, TaskRepository, TaskService, TaskUpdate, ValidationError, ValidationErrorKind,
};

const RULE_WIDE: &str = "==================================================";
const RULE_THIN: &str = "--------------------------------------------------";

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Update,
    Delete,
    Toggle,
    Help,
    Exit,
}

impl MenuChoice {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::View),
            "3" => Some(Self::Update),
            "4" => Some(Self::Delete),
            "5" => Some(Self::Toggle),
            "6" => Some(Self::Help),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Outcome of reading a task id at a prompt.
enum IdPrompt {
    Id(TaskId),
    /// Text was not a number; already reported.
    Rejected,
    /// End of input.
    Closed,
}

/// Menu session bound to one service and one input/output pair.
pub struct Menu<'svc, R: TaskRepository, I: BufRead, O: Write> {
    service: &'svc mut TaskService<R>,
    input: I,
    output: O,
    pause: bool,
}

impl<'svc, R: TaskRepository, I: BufRead, O: Write> Menu<'svc, R, I, O> {
    pub fn new(service: &'svc mut TaskService<R>, input: I, output: O, pause: bool) -> Self {
        Self {
            service,
            input,
            output,
            pause,
        }
    }

    /// Runs until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the Todo Application!")?;

        loop {
            self.display_menu()?;
            let Some(raw) = self.prompt("Enter your choice (1-7): ")? else {
                self.goodbye()?;
                break;
            };

            let flow = match MenuChoice::parse(&raw) {
                Some(choice) => {
                    debug!("event=menu_choice module=cli choice={choice:?}");
                    self.dispatch(choice)?
                }
                None => {
                    writeln!(
                        self.output,
                        "Invalid choice. Please enter a number between 1 and 7."
                    )?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }

            if self.pause && self.prompt("\nPress Enter to continue...")?.is_none() {
                self.goodbye()?;
                break;
            }
        }

        info!("event=menu_exit module=cli status=ok");
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        match choice {
            MenuChoice::Add => self.add_task(),
            MenuChoice::View => self.view_all_tasks().map(|()| Flow::Continue),
            MenuChoice::Update => self.update_task(),
            MenuChoice::Delete => self.delete_task(),
            MenuChoice::Toggle => self.toggle_task(),
            MenuChoice::Help => self.show_help().map(|()| Flow::Continue),
            MenuChoice::Exit => {
                writeln!(self.output, "Goodbye!")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn display_menu(&mut self) -> io::Result<()> {
        let out = &mut self.output;
        writeln!(out, "\n{RULE_WIDE}")?;
        writeln!(out, "                 TODO APPLICATION")?;
        writeln!(out, "{RULE_WIDE}")?;
        writeln!(out, "1. Add Task        - Create a new task")?;
        writeln!(out, "2. View All Tasks  - Display all tasks")?;
        writeln!(out, "3. Update Task     - Modify existing task")?;
        writeln!(out, "4. Delete Task     - Remove a task (with confirmation)")?;
        writeln!(out, "5. Toggle Complete - Mark task as complete/incomplete")?;
        writeln!(out, "6. Help            - Show instructions")?;
        writeln!(out, "7. Exit            - Quit the application")?;
        writeln!(out, "{RULE_THIN}")?;
        writeln!(out, "Instructions:")?;
        writeln!(out, "- Enter the number of your choice")?;
        writeln!(out, "- For task operations, you'll be prompted for task ID")?;
        writeln!(out, "- Empty titles are not allowed")?;
        writeln!(out, "{RULE_THIN}")
    }

    fn add_task(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n--- Add New Task ---")?;
        let Some(title) = self.prompt("Enter task title: ")? else {
            return self.goodbye();
        };
        if title.is_empty() {
            writeln!(self.output, "Error: Task title cannot be empty.")?;
            return Ok(Flow::Continue);
        }
        let Some(description) =
            self.prompt("Enter task description (optional, press Enter to skip): ")?
        else {
            return self.goodbye();
        };

        match self.service.create(&title, Some(description.as_str())) {
            Ok(id) => writeln!(self.output, "Task added successfully with ID: {id}")?,
            Err(err) => self.report(None, &err)?,
        }
        Ok(Flow::Continue)
    }

    fn view_all_tasks(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- All Tasks ---")?;
        let tasks = self.service.list();
        if tasks.is_empty() {
            return writeln!(self.output, "No tasks found.");
        }

        writeln!(
            self.output,
            "{:<4} {:<10} {:<20} {}",
            "ID", "Status", "Title", "Description"
        )?;
        writeln!(self.output, "{}", "-".repeat(60))?;
        for task in &tasks {
            writeln!(
                self.output,
                "{:<4} {:<10} {:<20} {}",
                task.id,
                status_label(task),
                task.title,
                task.description
            )?;
        }
        Ok(())
    }

    fn update_task(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n--- Update Task ---")?;
        let id = match self.prompt_task_id("Enter task ID to update: ")? {
            IdPrompt::Id(id) => id,
            IdPrompt::Rejected => return Ok(Flow::Continue),
            IdPrompt::Closed => return self.goodbye(),
        };
        let current = match self.service.get_by_id(id) {
            Ok(task) => task,
            Err(err) => {
                self.report(Some(id), &err)?;
                return Ok(Flow::Continue);
            }
        };

        writeln!(self.output, "Current task: {}", current.title)?;
        writeln!(self.output, "Current description: {}", current.description)?;

        let title_prompt = format!(
            "Enter new title (or press Enter to keep '{}'): ",
            current.title
        );
        let Some(new_title) = self.prompt(&title_prompt)? else {
            return self.goodbye();
        };
        let Some(new_description) =
            self.prompt("Enter new description (or press Enter to keep current): ")?
        else {
            return self.goodbye();
        };

        let update = TaskUpdate {
            title: non_empty(new_title),
            description: non_empty(new_description),
        };
        if update.title.is_none() && update.description.is_none() {
            writeln!(self.output, "No changes were made.")?;
            return Ok(Flow::Continue);
        }

        match self.service.update(id, update) {
            Ok(()) => writeln!(self.output, "Task updated successfully.")?,
            Err(err) => self.report(Some(id), &err)?,
        }
        Ok(Flow::Continue)
    }

    fn delete_task(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n--- Delete Task ---")?;
        let id = match self.prompt_task_id("Enter task ID to delete: ")? {
            IdPrompt::Id(id) => id,
            IdPrompt::Rejected => return Ok(Flow::Continue),
            IdPrompt::Closed => return self.goodbye(),
        };
        let task = match self.service.get_by_id(id) {
            Ok(task) => task,
            Err(err) => {
                self.report(Some(id), &err)?;
                return Ok(Flow::Continue);
            }
        };

        let question = format!(
            "Are you sure you want to delete task '{}'? (yes/no): ",
            task.title
        );
        let Some(answer) = self.prompt(&question)? else {
            return self.goodbye();
        };
        if !matches!(answer.to_lowercase().as_str(), "yes" | "y") {
            writeln!(self.output, "Task deletion cancelled.")?;
            return Ok(Flow::Continue);
        }

        match self.service.delete(id) {
            Ok(()) => writeln!(self.output, "Task deleted successfully.")?,
            Err(err) => self.report(Some(id), &err)?,
        }
        Ok(Flow::Continue)
    }

    fn toggle_task(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n--- Toggle Task Completion ---")?;
        let id = match self.prompt_task_id("Enter task ID to toggle: ")? {
            IdPrompt::Id(id) => id,
            IdPrompt::Rejected => return Ok(Flow::Continue),
            IdPrompt::Closed => return self.goodbye(),
        };

        let before = match self.service.get_by_id(id) {
            Ok(task) => task,
            Err(err) => {
                self.report(Some(id), &err)?;
                return Ok(Flow::Continue);
            }
        };
        if let Err(err) = self.service.toggle_completion(id) {
            self.report(Some(id), &err)?;
            return Ok(Flow::Continue);
        }

        writeln!(
            self.output,
            "Task status changed from {} to {}.",
            completion_label(before.completed),
            completion_label(!before.completed)
        )?;
        Ok(Flow::Continue)
    }

    fn show_help(&mut self) -> io::Result<()> {
        let out = &mut self.output;
        writeln!(out, "\n{RULE_WIDE}")?;
        writeln!(out, "                    HELP")?;
        writeln!(out, "{RULE_WIDE}")?;
        writeln!(out, "TASK ID EXPLANATION:")?;
        writeln!(out, "- Each task has a unique ID number")?;
        writeln!(out, "- You'll need this ID to update, delete, or toggle tasks")?;
        writeln!(out, "- Use the 'View All Tasks' option to see all task IDs")?;
        writeln!(out)?;
        writeln!(out, "COMMAND EXPLANATIONS:")?;
        writeln!(out, "- Add Task: Creates a new task with a title and optional description")?;
        writeln!(out, "- View All Tasks: Shows all tasks with their status and details")?;
        writeln!(out, "- Update Task: Change the title or description of an existing task")?;
        writeln!(out, "- Delete Task: Remove a task permanently (with confirmation)")?;
        writeln!(out, "- Toggle Complete: Switch task status between complete/incomplete")?;
        writeln!(out, "- Help: Shows this help message")?;
        writeln!(out, "- Exit: Closes the application")?;
        writeln!(out)?;
        writeln!(out, "VALIDATION RULES:")?;
        writeln!(out, "- Task titles cannot be empty")?;
        writeln!(out, "- Task IDs must be positive numbers")?;
        writeln!(out, "{RULE_WIDE}")
    }

    /// Reads one trimmed line; `None` on end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_task_id(&mut self, label: &str) -> io::Result<IdPrompt> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(IdPrompt::Closed);
        };
        match parse_task_id(&raw) {
            Ok(id) => Ok(IdPrompt::Id(id)),
            Err(message) => {
                writeln!(self.output, "Error: {message}")?;
                Ok(IdPrompt::Rejected)
            }
        }
    }

    fn report(&mut self, id: Option<TaskId>, err: &ValidationError) -> io::Result<()> {
        match (err.kind(), id) {
            (ValidationErrorKind::NotFound, Some(id)) => {
                writeln!(self.output, "Error: Task with ID {id} does not exist.")
            }
            (ValidationErrorKind::InvalidId, _) => {
                writeln!(self.output, "Error: Task ID must be a positive integer.")
            }
            _ => writeln!(self.output, "Error: {err}"),
        }
    }

    fn goodbye(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\nGoodbye!")?;
        Ok(Flow::Exit)
    }
}

/// Parses raw id text typed at a prompt.
pub fn parse_task_id(raw: &str) -> Result<TaskId, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Task ID cannot be empty.");
    }
    raw.parse::<TaskId>().map_err(|_| "Task ID must be a number.")
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

fn status_label(task: &Task) -> &'static str {
    if task.completed {
        "✓ Done"
    } else {
        "○ Pending"
    }
}

fn completion_label(completed: bool) -> &'static str {
    if completed {
        "Complete"
    } else {
        "Incomplete"
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_task_id, Menu, MenuChoice};
    use taskpad_core::{InMemoryTaskRepository, TaskService};

    fn run_script(service: &mut TaskService<InMemoryTaskRepository>, script: &str) -> String {
        let mut output = Vec::new();
        Menu::new(service, script.as_bytes(), &mut output, false)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn new_service() -> TaskService<InMemoryTaskRepository> {
        TaskService::new(InMemoryTaskRepository::new())
    }

    #[test]
    fn parse_choice_accepts_only_menu_numbers() {
        assert_eq!(MenuChoice::parse(" 1 "), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse("7"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("8"), None);
        assert_eq!(MenuChoice::parse("add"), None);
    }

    #[test]
    fn parse_task_id_reports_empty_and_non_numeric() {
        assert_eq!(parse_task_id(" 12 "), Ok(12));
        assert_eq!(parse_task_id("-3"), Ok(-3));
        assert_eq!(parse_task_id(""), Err("Task ID cannot be empty."));
        assert_eq!(parse_task_id("abc"), Err("Task ID must be a number."));
        assert_eq!(parse_task_id("1.5"), Err("Task ID must be a number."));
    }

    #[test]
    fn add_then_view_lists_the_task() {
        let mut service = new_service();
        let out = run_script(&mut service, "1\nBuy milk\n2 litres\n2\n7\n");

        assert!(out.contains("Task added successfully with ID: 1"));
        assert!(out.contains("○ Pending"));
        assert!(out.contains("Buy milk"));
        assert!(out.contains("2 litres"));
        assert!(out.trim_end().ends_with("Goodbye!"));
        assert_eq!(service.list().len(), 1);
    }

    #[test]
    fn empty_title_is_rejected_before_service_call() {
        let mut service = new_service();
        let out = run_script(&mut service, "1\n   \n7\n");

        assert!(out.contains("Error: Task title cannot be empty."));
        assert!(service.list().is_empty());
    }

    #[test]
    fn view_on_empty_store() {
        let mut service = new_service();
        let out = run_script(&mut service, "2\n7\n");
        assert!(out.contains("No tasks found."));
    }

    #[test]
    fn update_keeps_blank_fields_and_reports_no_changes() {
        let mut service = new_service();
        service.create("Old", Some("desc")).unwrap();

        let out = run_script(&mut service, "3\n1\n\n\n3\n1\nNew\n\n7\n");

        assert!(out.contains("Current task: Old"));
        assert!(out.contains("No changes were made."));
        assert!(out.contains("Task updated successfully."));
        let task = service.get_by_id(1).unwrap();
        assert_eq!(task.title, "New");
        assert_eq!(task.description, "desc");
    }

    #[test]
    fn id_prompts_report_bad_input() {
        let mut service = new_service();
        let out = run_script(&mut service, "3\n\n4\nabc\n5\n0\n5\n9\n7\n");

        assert!(out.contains("Error: Task ID cannot be empty."));
        assert!(out.contains("Error: Task ID must be a number."));
        assert!(out.contains("Error: Task ID must be a positive integer."));
        assert!(out.contains("Error: Task with ID 9 does not exist."));
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut service = new_service();
        service.create("Keep", None).unwrap();
        service.create("Drop", None).unwrap();

        let out = run_script(&mut service, "4\n1\nno\n4\n2\nY\n7\n");

        assert!(out.contains("Are you sure you want to delete task 'Keep'? (yes/no): "));
        assert!(out.contains("Task deletion cancelled."));
        assert!(out.contains("Task deleted successfully."));
        let ids: Vec<_> = service.list().into_iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn toggle_reports_transition() {
        let mut service = new_service();
        service.create("Flip", None).unwrap();

        let out = run_script(&mut service, "5\n1\n5\n1\n7\n");

        assert!(out.contains("Task status changed from Incomplete to Complete."));
        assert!(out.contains("Task status changed from Complete to Incomplete."));
        assert!(!service.get_by_id(1).unwrap().completed);
    }

    #[test]
    fn menu_prints_instructions_after_options() {
        let mut service = new_service();
        let out = run_script(&mut service, "7\n");

        let options_end = out.find("7. Exit").unwrap();
        let instructions = out.find("Instructions:").unwrap();
        assert!(instructions > options_end);
        assert!(out.contains("- Enter the number of your choice"));
        assert!(out.contains("- For task operations, you'll be prompted for task ID"));
        assert!(out.contains("- Empty titles are not allowed"));
    }

    #[test]
    fn help_and_invalid_choice() {
        let mut service = new_service();
        let out = run_script(&mut service, "6\n9\n7\n");

        assert!(out.contains("VALIDATION RULES:"));
        assert!(out.contains("Invalid choice. Please enter a number between 1 and 7."));
    }

    #[test]
    fn end_of_input_mid_action_says_goodbye() {
        let mut service = new_service();
        let out = run_script(&mut service, "1\nHalf");

        assert!(out.trim_end().ends_with("Goodbye!"));
        assert!(service.list().is_empty());
    }

    #[test]
    fn pause_waits_for_enter_between_actions() {
        let mut service = new_service();
        let mut output = Vec::new();
        Menu::new(&mut service, "2\n\n7\n".as_bytes(), &mut output, true)
            .run()
            .unwrap();
        let out = String::from_utf8(output).unwrap();

        assert!(out.contains("Press Enter to continue..."));
        assert!(out.trim_end().ends_with("Goodbye!"));
    }
}
