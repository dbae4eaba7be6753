use log::{info, trace};

use std::collections::HashMap;
use std::net::{SocketAddr, TcpStream};
use std::thread;
use std::thread::JoinHandle;

use crossbeam_channel;
use crossbeam_channel::{Receiver, Sender};

use failure::{Error, Fail};

use websocket::client::sync::Client;
use websocket::receiver::Reader;
use websocket::sender::Writer;
use websocket::server::upgrade::sync::Buffer;
use websocket::server::upgrade::WsUpgrade;
use websocket::sync::Server as WsServer;
use websocket::OwnedMessage;

#[derive(Debug, Fail)]
enum ServerError {
  #[fail(display = "Unable to accept connection: {}", cause)]
  RequestAccept { cause: String },
  #[fail(display = "Failed to retrieve the client address: {}", cause)]
  ClientAddress { cause: String },
  #[fail(display = "Only localhost connections are allowed, but found {}", ip)]
  NotLocalhost { ip: String },
  #[fail(display = "Failed to split the client IO: {}", cause)]
  ClientSplit { cause: String },
}

/// Everything that moves between the connection threads, the router and
/// the controller. Payloads are text frames carrying one JSON message.
#[derive(Debug, Clone)]
pub enum Message {
  Connection { port: u16, sender: Sender<Message> },
  Close { port: u16 },
  Incoming { port: u16, data: String },
  Outgoing { port: u16, data: String },
  Stop,
}

type Clients = HashMap<u16, Sender<Message>>;

pub struct Server {
  router_tx: Sender<Message>,
  incoming_rx: Receiver<Message>,
  router_thread: JoinHandle<()>,

  // Blocks on accept; left to die with the process on close.
  #[allow(dead_code)]
  listener_thread: JoinHandle<Result<(), Error>>,
}

impl Server {
  pub fn new(port: u16) -> Result<Server, Error> {
    let (router_tx, router_rx) = crossbeam_channel::unbounded::<Message>();
    let (incoming_tx, incoming_rx) = crossbeam_channel::unbounded::<Message>();

    let router_thread = Self::start_router(router_rx, incoming_tx)?;
    let listener_thread = Self::start_listener(router_tx.clone(), port)?;

    Ok(Server {
      router_tx,
      incoming_rx,
      router_thread,
      listener_thread,
    })
  }

  /// Messages for the controller: Incoming requests and the final Stop.
  pub fn receiver(&self) -> Receiver<Message> {
    self.incoming_rx.clone()
  }

  /// Entry point for Outgoing responses, routed to the addressed client.
  pub fn sender(&self) -> Sender<Message> {
    self.router_tx.clone()
  }

  pub fn close(self) {
    info!("Closing the server ...");

    drop(self.router_tx.send(Message::Stop));
    drop(self.router_thread.join());
  }

  fn start_router(
    router_rx: Receiver<Message>,
    incoming_tx: Sender<Message>,
  ) -> Result<JoinHandle<()>, Error> {
    let handle = thread::Builder::new().name("ws-router".into()).spawn(move || {
      let mut clients: Clients = HashMap::new();

      for msg in router_rx.iter() {
        match msg {
          Message::Connection { port, sender } => {
            clients.insert(port, sender);
          }

          Message::Close { port } => {
            clients.remove(&port);
          }

          Message::Incoming { port, data } => {
            drop(incoming_tx.send(Message::Incoming { port, data }));
          }

          Message::Outgoing { port, data } => {
            if let Some(client_tx) = clients.get(&port) {
              drop(client_tx.send(Message::Outgoing { port, data }));
            }
          }

          Message::Stop => {
            for client_tx in clients.values() {
              drop(client_tx.send(Message::Stop));
            }
            drop(incoming_tx.send(Message::Stop));
            break;
          }
        }
      }

      trace!("Finished the router thread");
    })?;

    Ok(handle)
  }

  fn start_listener(
    router_tx: Sender<Message>,
    port: u16,
  ) -> Result<JoinHandle<Result<(), Error>>, Error> {
    let handle = thread::Builder::new().name("ws-listener".into()).spawn(move || {
      let addr = format!("127.0.0.1:{}", port);
      info!("Starting the WebSocket server at {} ...", addr);
      let server = WsServer::bind(addr)?;
      for request in server.filter_map(Result::ok) {
        Self::accept_request(router_tx.clone(), request);
      }
      Ok(())
    })?;

    Ok(handle)
  }

  fn accept_request(router_tx: Sender<Message>, request: WsUpgrade<TcpStream, Option<Buffer>>) {
    drop(thread::spawn(move || -> Result<(), Error> {
      let (addr, reader, writer) = Self::open_client(request)?;
      let port = addr.port();

      let (client_tx, client_rx) = crossbeam_channel::unbounded::<Message>();
      drop(router_tx.send(Message::Connection {
        port,
        sender: client_tx,
      }));

      Self::write_messages(addr, client_rx, writer)?;
      Self::read_messages(addr, router_tx, reader);

      Ok(())
    }));
  }

  fn open_client(
    request: WsUpgrade<TcpStream, Option<Buffer>>,
  ) -> Result<(SocketAddr, Reader<TcpStream>, Writer<TcpStream>), Error> {
    let mut client = request
      .accept()
      .map_err(|(_, err)| ServerError::RequestAccept {
        cause: err.to_string(),
      })?;

    let addr = Self::ensure_localhost(&mut client)?;
    info!("New WebSocket connection: {}", addr);

    let (reader, writer) = client.split().map_err(|err| ServerError::ClientSplit {
      cause: err.to_string(),
    })?;

    Ok((addr, reader, writer))
  }

  fn ensure_localhost(client: &mut Client<TcpStream>) -> Result<SocketAddr, ServerError> {
    let addr = client.peer_addr().map_err(|err| ServerError::ClientAddress {
      cause: err.to_string(),
    })?;

    let ip = addr.ip();
    if ip.is_loopback() {
      Ok(addr)
    } else {
      drop(client.send_message(&OwnedMessage::Close(None)));
      Err(ServerError::NotLocalhost { ip: ip.to_string() })
    }
  }

  fn write_messages(
    addr: SocketAddr,
    client_rx: Receiver<Message>,
    mut writer: Writer<TcpStream>,
  ) -> Result<(), Error> {
    let thread_name = format!("ws-write-{}", addr.port());
    thread::Builder::new().name(thread_name).spawn(move || {
      for msg in client_rx.iter() {
        match msg {
          Message::Outgoing { data, .. } => {
            trace!("{} Send: {}", addr, data);
            drop(writer.send_message(&OwnedMessage::Text(data)));
          }
          Message::Stop => {
            drop(writer.send_message(&OwnedMessage::Close(None)));
            break;
          }
          _ => {}
        }
      }

      trace!("{} Finished the write thread", addr);
    })?;

    Ok(())
  }

  fn read_messages(addr: SocketAddr, router_tx: Sender<Message>, mut reader: Reader<TcpStream>) {
    let port = addr.port();

    for message in reader.incoming_messages() {
      match message {
        Ok(OwnedMessage::Text(data)) => {
          trace!("{} Text: {}", addr, data);
          drop(router_tx.send(Message::Incoming { port, data }));
        }
        Ok(OwnedMessage::Close(data)) => {
          trace!("{} Close: {:?}", addr, data);
          drop(router_tx.send(Message::Close { port }));
          break;
        }
        Err(err) => {
          // A forced close: the client went away and the kernel cleaned up the socket.
          trace!("{} Err: {:?}", addr, err);
          drop(router_tx.send(Message::Close { port }));
          break;
        }
        _ => {}
      }
    }

    trace!("{} Finished the read thread", addr);
  }
}
