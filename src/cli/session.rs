//! Interactive session: the form-driven front end over a repository

use crate::application::{count_posts, create_post, delete_post, list_posts, show_post, update_post};
use crate::cli::output::{format_post_detail, format_post_list};
use crate::domain::{PostForm, PostId, PostPatch};
use crate::error::{BlogError, Result};
use crate::infrastructure::{Config, PostRepository};
use std::io::{BufRead, Write};

const HELP: &str = "Commands:
  list           List all posts, newest first
  show <id>      Read a post
  new            Write a new post
  edit <id>      Change a post's title, author or content
  delete <id>    Delete a post
  count          Number of posts
  help           Show this help
  quit           Leave (posts are not saved)";

/// Line that ends multi-line content input
const END_OF_CONTENT: &str = ".";

enum Flow {
    Continue,
    Quit,
}

/// A single interactive session. Borrows the repository from whoever
/// composed the application.
pub struct Session<'a, R: PostRepository> {
    repository: &'a mut R,
    config: &'a Config,
}

impl<'a, R: PostRepository> Session<'a, R> {
    pub fn new(repository: &'a mut R, config: &'a Config) -> Self {
        Session { repository, config }
    }

    /// Read commands until `quit` or end of input.
    ///
    /// Not-found and validation failures are reported to `output` and the
    /// session carries on; only I/O errors end it early.
    pub fn run<I: BufRead, O: Write>(&mut self, input: &mut I, output: &mut O) -> Result<()> {
        writeln!(output, "AZ Blog. Type 'help' for commands.")?;

        loop {
            write!(output, "> ")?;
            output.flush()?;

            let Some(line) = read_line(input)? else {
                writeln!(output)?;
                break;
            };

            match self.dispatch(line.trim(), input, output) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(BlogError::Io(e)) => return Err(BlogError::Io(e)),
                Err(e) => writeln!(output, "{}", e.display_with_suggestions())?,
            }
        }

        Ok(())
    }

    fn dispatch<I: BufRead, O: Write>(
        &mut self,
        line: &str,
        input: &mut I,
        output: &mut O,
    ) -> Result<Flow> {
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "help" => writeln!(output, "{}", HELP)?,
            "list" => {
                let posts = list_posts(&*self.repository);
                write!(output, "{}", format_post_list(&posts, self.config))?;
            }
            "show" => {
                let post = show_post(&*self.repository, &require_id(command, arg)?)?;
                write!(output, "{}", format_post_detail(&post, self.config))?;
            }
            "new" => self.new_post(input, output)?,
            "edit" => self.edit_post(&require_id(command, arg)?, input, output)?,
            "delete" => self.delete_post(&require_id(command, arg)?, input, output)?,
            "count" => writeln!(output, "{} posts", count_posts(&*self.repository))?,
            "quit" | "exit" => return Ok(Flow::Quit),
            other => writeln!(
                output,
                "Unknown command: '{}'. Type 'help' for commands.",
                other
            )?,
        }

        Ok(Flow::Continue)
    }

    fn new_post<I: BufRead, O: Write>(&mut self, input: &mut I, output: &mut O) -> Result<()> {
        let title = prompt(input, output, "Title: ")?;
        let author_name = prompt(input, output, "Author: ")?;
        writeln!(
            output,
            "Content (end with a line containing only '{}'):",
            END_OF_CONTENT
        )?;
        let content = read_content(input)?;

        let post = create_post(
            &mut *self.repository,
            &PostForm::new(title, author_name, content),
        )?;
        writeln!(output, "Post published! Your new blog post is now live.")?;
        writeln!(output, "id: {}", post.id())?;
        Ok(())
    }

    fn edit_post<I: BufRead, O: Write>(
        &mut self,
        id: &PostId,
        input: &mut I,
        output: &mut O,
    ) -> Result<()> {
        let current = show_post(&*self.repository, id)?;
        writeln!(output, "Leave a field empty to keep its current value.")?;

        let mut patch = PostPatch::new();
        let title = prompt(input, output, &format!("Title [{}]: ", current.title()))?;
        if !title.trim().is_empty() {
            patch = patch.title(title);
        }
        let author = prompt(
            input,
            output,
            &format!("Author [{}]: ", current.author().name()),
        )?;
        if !author.trim().is_empty() {
            patch = patch.author_name(author);
        }
        writeln!(
            output,
            "Content (end with a line containing only '{}'):",
            END_OF_CONTENT
        )?;
        let content = read_content(input)?;
        if !content.trim().is_empty() {
            patch = patch.content(content);
        }

        if patch.is_empty() {
            writeln!(output, "Nothing changed.")?;
            return Ok(());
        }

        update_post(&mut *self.repository, id, &patch)?;
        writeln!(output, "Post updated.")?;
        Ok(())
    }

    fn delete_post<I: BufRead, O: Write>(
        &mut self,
        id: &PostId,
        input: &mut I,
        output: &mut O,
    ) -> Result<()> {
        let post = show_post(&*self.repository, id)?;

        if self.config.confirm_delete {
            let answer = prompt(
                input,
                output,
                &format!(
                    "Delete \"{}\"? This action cannot be undone. [y/N] ",
                    post.title()
                ),
            )?;
            if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
                writeln!(output, "Cancelled.")?;
                return Ok(());
            }
        }

        delete_post(&mut *self.repository, id)?;
        writeln!(output, "Post deleted. The post has been permanently removed.")?;
        Ok(())
    }
}

fn require_id(command: &str, arg: &str) -> Result<PostId> {
    if arg.is_empty() {
        return Err(BlogError::Usage(format!("{} <id>", command)));
    }
    Ok(PostId::new(arg))
}

/// One line without its terminator, or None at end of input.
fn read_line<I: BufRead>(input: &mut I) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn prompt<I: BufRead, O: Write>(input: &mut I, output: &mut O, label: &str) -> Result<String> {
    write!(output, "{}", label)?;
    output.flush()?;
    Ok(read_line(input)?.unwrap_or_default())
}

/// Lines up to the terminator (or end of input), joined with newlines.
fn read_content<I: BufRead>(input: &mut I) -> Result<String> {
    let mut lines = Vec::new();
    while let Some(line) = read_line(input)? {
        if line.trim() == END_OF_CONTENT {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryRepository;
    use std::io::Cursor;

    const CONTENT: &str = "This paragraph is long enough to satisfy the content check.";

    fn run(repo: &mut InMemoryRepository, config: &Config, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        Session::new(repo, config)
            .run(&mut input, &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_list_and_count() {
        let mut repo = InMemoryRepository::seeded();
        let output = run(&mut repo, &Config::default(), "list\ncount\nquit\n");

        assert!(output.contains("post-1 · Azeez Adams"));
        assert!(output.contains("3 posts"));
    }

    #[test]
    fn test_empty_list() {
        let mut repo = InMemoryRepository::new();
        let output = run(&mut repo, &Config::default(), "list\n");
        assert!(output.contains("No posts yet\n> "));
    }

    #[test]
    fn test_show_post() {
        let mut repo = InMemoryRepository::seeded();
        let output = run(&mut repo, &Config::default(), "show post-2\n");

        assert!(output.contains("By Azeez Adams · February 6, 2026 · 1 min read"));
        assert!(output.contains("\nAccessibility is not a feature, it's a standard.\n"));
    }

    #[test]
    fn test_show_missing_post_keeps_session_alive() {
        let mut repo = InMemoryRepository::seeded();
        let output = run(&mut repo, &Config::default(), "show nope\ncount\n");

        assert!(output.contains("Post not found: nope"));
        assert!(output.contains("3 posts"));
    }

    #[test]
    fn test_show_without_id() {
        let mut repo = InMemoryRepository::seeded();
        let output = run(&mut repo, &Config::default(), "show\n");
        assert!(output.contains("Usage: show <id>"));
    }

    #[test]
    fn test_new_post() {
        let mut repo = InMemoryRepository::new();
        let script = format!("new\nHello World\nJane\n{}\n\nMore text.\n.\nlist\n", CONTENT);
        let output = run(&mut repo, &Config::default(), &script);

        assert!(output.contains("Post published!"));
        assert_eq!(repo.count(), 1);

        let post = &repo.list_all()[0];
        assert_eq!(post.title(), "Hello World");
        assert_eq!(post.author().name(), "Jane");
        assert_eq!(post.content(), format!("{}\n\nMore text.", CONTENT));
        assert!(output.contains(&format!("id: {}", post.id())));
    }

    #[test]
    fn test_new_post_validation_failure() {
        let mut repo = InMemoryRepository::new();
        let output = run(&mut repo, &Config::default(), "new\nHi\nJ\nshort\n.\ncount\n");

        assert!(output.contains("Title must be at least 5 characters"));
        assert!(output.contains("Author name must be at least 2 characters"));
        assert!(output.contains("Content must be at least 50 characters"));
        assert!(output.contains("0 posts"));
        assert_eq!(repo.count(), 0);
    }

    #[test]
    fn test_edit_post_keeps_blank_fields() {
        let mut repo = InMemoryRepository::seeded();
        let before = repo.get(&PostId::new("post-1")).unwrap();

        let output = run(&mut repo, &Config::default(), "edit post-1\nNew title\n\n.\n");

        assert!(output.contains("Post updated."));
        let after = repo.get(&PostId::new("post-1")).unwrap();
        assert_eq!(after.title(), "New title");
        assert_eq!(after.author(), before.author());
        assert_eq!(after.content(), before.content());
        assert_eq!(after.date(), before.date());
    }

    #[test]
    fn test_edit_nothing() {
        let mut repo = InMemoryRepository::seeded();
        let output = run(&mut repo, &Config::default(), "edit post-1\n\n\n.\n");
        assert!(output.contains("Nothing changed."));
    }

    #[test]
    fn test_delete_confirmed() {
        let mut repo = InMemoryRepository::seeded();
        let output = run(&mut repo, &Config::default(), "delete post-1\ny\n");

        assert!(output.contains("Delete \"A Critique of a Website's Responsiveness"));
        assert!(output.contains("Post deleted."));
        assert_eq!(repo.count(), 2);
    }

    #[test]
    fn test_delete_cancelled() {
        let mut repo = InMemoryRepository::seeded();
        let output = run(&mut repo, &Config::default(), "delete post-1\n\n");

        assert!(output.contains("Cancelled."));
        assert_eq!(repo.count(), 3);
    }

    #[test]
    fn test_delete_without_confirmation() {
        let mut repo = InMemoryRepository::seeded();
        let config = Config {
            confirm_delete: false,
            ..Config::default()
        };
        let output = run(&mut repo, &config, "delete post-3\ncount\n");

        assert!(output.contains("Post deleted."));
        assert!(output.contains("2 posts"));
    }

    #[test]
    fn test_delete_missing() {
        let mut repo = InMemoryRepository::seeded();
        let output = run(&mut repo, &Config::default(), "delete post-7\n");
        assert!(output.contains("Post not found: post-7"));
        assert_eq!(repo.count(), 3);
    }

    #[test]
    fn test_unknown_command() {
        let mut repo = InMemoryRepository::new();
        let output = run(&mut repo, &Config::default(), "publish\n");
        assert!(output.contains("Unknown command: 'publish'"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut repo = InMemoryRepository::seeded();
        let output = run(&mut repo, &Config::default(), "quit\ndelete post-1\ny\n");
        assert!(!output.contains("Post deleted."));
        assert_eq!(repo.count(), 3);
    }
}
