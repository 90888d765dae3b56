//! Embedded Leeds city-centre road network.
//!
//! A 10-node synthetic network laid over real Leeds landmarks, in the same
//! CSV layout the offline pipeline exports.  The centre streets are quick
//! but carry higher risk; the Park Lane loop to the west is slower and
//! quieter.  Nodes 8–9 form a detached fragment near Kirkstall.

use std::io::Cursor;

use sr_network::{NetworkResult, RoadNetwork, load_reader};

const NODES_CSV: &str = "\
node_id,lat,lon\n\
100,53.7950,-1.5476\n\
101,53.7966,-1.5460\n\
102,53.7985,-1.5428\n\
103,53.8002,-1.5440\n\
104,53.8067,-1.5550\n\
105,53.8100,-1.5620\n\
106,53.8000,-1.5560\n\
107,53.8060,-1.5480\n\
108,53.8150,-1.6000\n\
109,53.8155,-1.6010\n\
";

// Every road is listed once per direction.  101→103 has a parallel bus
// gate with a lower limit.
const EDGES_CSV: &str = "\
from,to,length,base_travel_time,maxspeed,normalized_risk\n\
100,101,200,,48,1.2\n\
101,100,200,,48,1.2\n\
101,102,300,,30,2.8\n\
102,101,300,,30,2.8\n\
102,103,200,,\"['30', '20']\",3.1\n\
103,102,200,,\"['30', '20']\",3.1\n\
101,103,450,,48,1.5\n\
101,103,450,,20,1.5\n\
103,101,450,,48,1.5\n\
103,107,700,,48,2.4\n\
107,103,700,,48,2.4\n\
107,104,600,,48,1.0\n\
104,107,600,,48,1.0\n\
104,105,600,45.0,,2.2\n\
105,104,600,45.0,,2.2\n\
100,106,1200,,45,0.4\n\
106,100,1200,,45,0.4\n\
106,104,1400,,45,0.3\n\
104,106,1400,,45,0.3\n\
108,109,90,,national,\n\
109,108,90,,national,\n\
";

/// Parse the embedded network.
pub fn embedded_network() -> NetworkResult<RoadNetwork> {
    load_reader(Cursor::new(NODES_CSV), Cursor::new(EDGES_CSV))
}
