use clap::{Args, Parser, Subcommand};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

/// Orders service command line client
#[derive(Parser, Debug)]
#[command(name = "orders-client")]
#[command(about = "client cli used to create and list orders on the server", version, long_about = None
)]
struct Cli {
    #[arg(long, global = true, default_value = "http://localhost:8080", help = "Server base url")]
    host: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser, Debug)]
enum Commands {
    /// order related ops
    #[command(arg_required_else_help = true)]
    Order(OrderArgs),
}

#[derive(Debug, Args)]
pub(crate) struct OrderArgs {
    #[command(subcommand)]
    command: OrderCmds,
}

#[derive(Debug, Subcommand)]
enum OrderCmds {
    #[command(arg_required_else_help = true)]
    Create(CreateArgs),
    List,
}

#[derive(Debug, Args, Serialize)]
struct CreateArgs {
    #[arg(help = "Order id")]
    id: String,
    #[arg(help = "Order price, must be positive")]
    price: f64,
    #[arg(help = "Order tax, must be positive")]
    tax: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrderResponse {
    pub id: String,
    pub price: f64,
    pub tax: f64,
    pub final_price: f64,
}

fn print_order(order: &OrderResponse) {
    println!(
        "{:<12} price={:<10.2} tax={:<10.2} final_price={:.2}",
        order.id, order.price, order.tax, order.final_price
    );
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Cli::parse();
    let url = format!("{}/order", args.host.trim_end_matches('/'));

    match args.command {
        Commands::Order(order) => match order.command {
            OrderCmds::Create(create) => {
                println!("creating order={}", create.id);
                let res = Client::new().post(&url).json(&create).send().await?;
                match res.status() {
                    StatusCode::OK => {
                        let order = res.json::<OrderResponse>().await?;
                        print_order(&order);
                    }
                    StatusCode::BAD_REQUEST => {
                        println!("Bad request, {}", res.text().await?);
                    }
                    StatusCode::CONFLICT => {
                        println!("order {} already exists", create.id);
                    }
                    unexpected => {
                        println!("got unexpected status code, {}", unexpected);
                    }
                }
            }
            OrderCmds::List => {
                let res = Client::new().get(&url).send().await?;
                match res.status() {
                    StatusCode::OK => {
                        let orders = res.json::<Vec<OrderResponse>>().await?;
                        println!("{} order(s)", orders.len());
                        orders.iter().for_each(print_order);
                    }
                    unexpected => {
                        println!("got unexpected status code, {}", unexpected);
                    }
                }
            }
        },
    };
    Ok(())
}
