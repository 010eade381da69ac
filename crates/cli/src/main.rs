use clap::{Parser, Subcommand};
use healthscope_core::{
    Category, CategoryFilter, ContentBuffer, CoreConfig, EditorGate, FileSlot, MarkupService,
    MediaKind, PublishService, Segment, StoryDraft, StoryId, StoryStore,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "healthscope")]
#[command(about = "HealthScope story catalog CLI")]
struct Cli {
    /// Directory holding the story data slot
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List stories, newest first
    List {
        /// Category filter ("All" or an exact category label)
        #[arg(long, default_value = "All")]
        category: String,
    },
    /// Read one story, rendering embedded media inline
    Read {
        /// Story id
        id: String,
    },
    /// Publish a new story (requires the editor passphrase)
    Publish {
        /// Editor passphrase
        #[arg(long)]
        passphrase: String,
        /// Article title
        #[arg(long)]
        title: String,
        /// Full article body
        #[arg(long)]
        content: String,
        /// Short excerpt for the preview card
        #[arg(long, default_value = "")]
        excerpt: String,
        /// Category label
        #[arg(long, default_value = "Prevention")]
        category: String,
        /// Author name
        #[arg(long, default_value = "")]
        author: String,
        /// Read time label
        #[arg(long, default_value = "")]
        read_time: String,
        /// Cover image URL
        #[arg(long, default_value = "")]
        image_url: String,
        /// Append an image embed to the body (repeatable)
        #[arg(long)]
        embed_image: Vec<String>,
        /// Append a video embed to the body (repeatable)
        #[arg(long)]
        embed_video: Vec<String>,
    },
    /// Print the closed set of categories
    Categories,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match cli.data_dir {
        Some(data_dir) => CoreConfig::new(
            data_dir,
            healthscope_core::constants::DEFAULT_EDITOR_PASSPHRASE.to_string(),
        )?,
        None => CoreConfig::default(),
    };
    let mut store = StoryStore::open(Box::new(FileSlot::new(config.data_dir())));

    match cli.command {
        Commands::List { category } => {
            let filter: CategoryFilter = category.parse()?;
            let stories = store.filter_by_category(filter);
            if stories.is_empty() {
                println!("No stories found.");
            } else {
                for story in stories {
                    println!(
                        "ID: {}, Title: {}, Category: {}, Published: {}",
                        story.id, story.title, story.category, story.date
                    );
                }
            }
        }
        Commands::Read { id } => {
            let id = StoryId::new(id);
            match store.find(&id) {
                Some(story) => {
                    println!("{}", story.title);
                    println!(
                        "{} | {} | {} | {}",
                        story.category, story.date, story.author, story.read_time
                    );
                    println!();
                    let renderer = MarkupService::new();
                    for segment in renderer.render(&story.content) {
                        match segment {
                            Segment::Paragraph(line) => println!("{line}"),
                            Segment::Image(url) => println!("[image] {url}"),
                            Segment::Video(url) => println!("[video] {url}"),
                        }
                    }
                }
                None => eprintln!("No story with id: {id}"),
            }
        }
        Commands::Publish {
            passphrase,
            title,
            content,
            excerpt,
            category,
            author,
            read_time,
            image_url,
            embed_image,
            embed_video,
        } => {
            let gate = EditorGate::new(config.editor_passphrase());
            if !gate.unlock(&passphrase) {
                eprintln!("Incorrect password");
                return Ok(());
            }

            let category: Category = category.parse()?;

            let mut buffer = ContentBuffer::new();
            buffer.set_text(content);
            for url in &embed_image {
                buffer.insert_media(MediaKind::Image, url);
            }
            for url in &embed_video {
                buffer.insert_media(MediaKind::Video, url);
            }

            let draft = StoryDraft {
                title,
                excerpt,
                content: buffer.into_text(),
                category,
                author,
                read_time,
                image_url,
            };

            let mut publisher = PublishService::new();
            match publisher.publish(draft) {
                Ok(story) => {
                    let id = story.id.clone();
                    match store.append(story) {
                        Ok(()) => println!("Published story with id: {id}"),
                        Err(e) => eprintln!("Error publishing story: {e}"),
                    }
                }
                Err(e) => eprintln!("Error publishing story: {e}"),
            }
        }
        Commands::Categories => {
            for category in Category::ALL {
                println!("{category}");
            }
        }
    }

    Ok(())
}
